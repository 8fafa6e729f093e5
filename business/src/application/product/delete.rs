use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before deleting
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        self.repository.delete(params.id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete product {}: {}", params.id, e));
            ProductError::from_lookup(e)
        })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::test_support::{MockProductRepo, mock_logger};
    use chrono::Utc;

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(move |id| {
            Ok(Product::from_repository(
                id,
                "Charger".to_string(),
                25.0,
                true,
                now,
                now,
            ))
        });
        mock_repo
            .expect_delete()
            .withf(|id| *id == 11)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 11 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 11 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
