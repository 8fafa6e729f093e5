use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        product
            .replace(params.name, params.price, params.availability)
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Rejected update of product {}: {}", params.id, e));
            })?;

        let updated = self.repository.update(&product).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to update product {}: {}", params.id, e));
            ProductError::from_lookup(e)
        })?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductId;
    use crate::test_support::{MockLog, MockProductRepo, mock_logger};
    use chrono::Utc;

    fn make_product(id: ProductId) -> Product {
        let now = Utc::now();
        Product::from_repository(id, "Old Name".to_string(), 20.0, true, now, now)
    }

    #[tokio::test]
    async fn should_replace_all_fields_when_product_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));
        mock_repo
            .expect_update()
            .withf(|p| p.id == 5 && p.name == "Curved Monitor" && p.price == 450.0 && !p.availability)
            .times(1)
            .returning(|p| Ok(p.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 5,
                name: "Curved Monitor".to_string(),
                price: 450.0,
                availability: false,
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.id, 5);
        assert_eq!(product.name, "Curved Monitor");
        assert_eq!(product.price, 450.0);
        assert!(!product.availability);
    }

    #[tokio::test]
    async fn should_reject_update_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 5,
                name: " ".to_string(),
                price: 10.0,
                availability: true,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 404,
                name: "Ghost".to_string(),
                price: 1.0,
                availability: true,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_warn_when_replacement_is_rejected() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id)));
        mock_repo.expect_update().never();
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("product 5"))
            .times(1)
            .returning(|_| ());

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 5,
                name: "Monitor".to_string(),
                price: -1.0,
                availability: true,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }
}
