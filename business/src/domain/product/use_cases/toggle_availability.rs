use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductId};

#[derive(Debug, Clone)]
pub struct ToggleAvailabilityParams {
    pub id: ProductId,
}

#[async_trait]
pub trait ToggleAvailabilityUseCase: Send + Sync {
    async fn execute(&self, params: ToggleAvailabilityParams) -> Result<Product, ProductError>;
}
