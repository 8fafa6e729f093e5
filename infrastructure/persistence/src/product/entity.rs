use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row shape of the `products` table.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.price,
            self.availability,
            self.created_at,
            self.updated_at,
        )
    }
}
