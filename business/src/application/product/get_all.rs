use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch products: {}", e));
            ProductError::Repository(e)
        })?;
        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockLog, MockProductRepo, mock_logger};
    use chrono::Utc;

    #[tokio::test]
    async fn should_return_products_in_repository_order() {
        let mut mock_repo = MockProductRepo::new();
        let now = Utc::now();
        mock_repo.expect_get_all().returning(move || {
            Ok(vec![
                Product::from_repository(2, "Laptop".to_string(), 50.0, true, now, now),
                Product::from_repository(3, "Tablet".to_string(), 30.0, true, now, now),
                Product::from_repository(1, "Mouse".to_string(), 10.0, false, now, now),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![50.0, 30.0, 10.0]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_log_result_size_at_debug_level() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_debug()
            .withf(|message| message.contains("Found 0 products"))
            .times(1)
            .returning(|_| ());

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
