use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductId};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, most expensive first.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Inserts a new row and returns it with its storage-assigned id.
    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
