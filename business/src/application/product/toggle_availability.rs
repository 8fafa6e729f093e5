use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::toggle_availability::{
    ToggleAvailabilityParams, ToggleAvailabilityUseCase,
};

pub struct ToggleAvailabilityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleAvailabilityUseCase for ToggleAvailabilityUseCaseImpl {
    async fn execute(&self, params: ToggleAvailabilityParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Toggling availability of product: {}", params.id));

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(ProductError::from_lookup)?;

        product.toggle_availability();

        let updated = self.repository.update(&product).await.map_err(|e| {
            self.logger.error(&format!(
                "Failed to toggle availability of product {}: {}",
                params.id, e
            ));
            ProductError::from_lookup(e)
        })?;

        self.logger.info(&format!(
            "Product {} availability is now {}",
            updated.id, updated.availability
        ));
        Ok(updated)
    }
}
