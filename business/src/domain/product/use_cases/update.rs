use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

/// Full replacement of a product's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
