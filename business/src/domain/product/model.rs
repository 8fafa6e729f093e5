use chrono::{DateTime, Utc};

use super::errors::ProductError;

/// Storage-assigned product identifier.
pub type ProductId = i32;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A product that has passed domain validation but has no identity yet.
///
/// The id and timestamps are assigned by the repository on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl NewProduct {
    pub fn new(name: String, price: f64) -> Result<Self, ProductError> {
        check_name(&name)?;
        check_price(price)?;

        Ok(Self {
            name,
            price,
            availability: true,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: f64,
        availability: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            availability,
            created_at,
            updated_at,
        }
    }

    /// Full replacement of the mutable fields. Identity and creation time are kept.
    pub fn replace(
        &mut self,
        name: String,
        price: f64,
        availability: bool,
    ) -> Result<(), ProductError> {
        check_name(&name)?;
        check_price(price)?;

        self.name = name;
        self.price = price;
        self.availability = availability;
        Ok(())
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}

fn check_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

fn check_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}
