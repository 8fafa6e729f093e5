use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::Deserialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use business::domain::product::model::{Product, ProductId};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;

use crate::api::validation::{
    FieldErrors, FieldOrder, as_bool, as_id, as_number, as_text, is_boolean, is_int, is_numeric,
    not_empty, validate_request,
};

pub const INVALID_ID: &str = "invalid ID.";
pub const NAME_EMPTY: &str = "product name cannot be empty.";
pub const PRICE_NOT_NUMERIC: &str = "invalid value";
pub const PRICE_EMPTY: &str = "price cannot be empty";
pub const INVALID_PRICE: &str = "invalid price";
pub const INVALID_AVAILABILITY: &str = "invalid availability value";
pub const PRODUCT_DELETED: &str = "Product deleted";

fn is_positive(value: &Value) -> Result<(), ValidationError> {
    if as_number(value).is_some_and(|price| price > 0.0) {
        Ok(())
    } else {
        Err(ValidationError::new("is_positive"))
    }
}

/// Path identifier of a single product.
#[derive(Debug, Validate)]
pub struct ProductPath {
    #[validate(custom(function = "is_int", message = "invalid ID."))]
    pub id: Value,
}

impl FieldOrder for ProductPath {
    const FIELDS: &'static [&'static str] = &["id"];
}

impl ProductPath {
    pub fn new(raw: &str) -> Self {
        Self {
            id: Value::String(raw.to_string()),
        }
    }

    pub fn to_id(&self) -> Result<ProductId, FieldErrors> {
        validate_request(self)?;
        field(&self.id, as_id, "id")
    }
}

/// Body of `POST /api/products`.
///
/// Fields are accepted as raw JSON so that the rules, not the deserializer,
/// decide which values are acceptable and report all problems. A body that
/// is not a JSON object has no fields.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateProductRequest {
    #[validate(custom(function = "not_empty", message = "product name cannot be empty."))]
    pub name: Value,
    #[validate(
        custom(function = "is_numeric", message = "invalid value"),
        custom(function = "not_empty", message = "price cannot be empty"),
        custom(function = "is_positive", message = "invalid price")
    )]
    pub price: Value,
}

impl FieldOrder for CreateProductRequest {
    const FIELDS: &'static [&'static str] = &["name", "price"];
}

/// Body of `PUT /api/products/:id`, with the path id folded in so that one
/// pass reports path and body problems together.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateProductRequest {
    #[serde(skip)]
    #[validate(custom(function = "is_int", message = "invalid ID."))]
    pub id: Value,
    #[validate(custom(function = "not_empty", message = "product name cannot be empty."))]
    pub name: Value,
    #[validate(
        custom(function = "is_numeric", message = "invalid value"),
        custom(function = "not_empty", message = "price cannot be empty"),
        custom(function = "is_positive", message = "invalid price")
    )]
    pub price: Value,
    #[validate(custom(function = "is_boolean", message = "invalid availability value"))]
    pub availability: Value,
}

impl FieldOrder for UpdateProductRequest {
    const FIELDS: &'static [&'static str] = &["id", "name", "price", "availability"];
}

fn object_fields<T: for<'de> Deserialize<'de> + Default>(body: Value) -> T {
    match body {
        Value::Object(_) => serde_json::from_value(body).unwrap_or_default(),
        _ => T::default(),
    }
}

/// Reads a field the rules have already accepted.
fn field<T>(value: &Value, convert: fn(&Value) -> Option<T>, name: &str) -> Result<T, FieldErrors> {
    convert(value).ok_or_else(|| FieldErrors::single(name, PRICE_NOT_NUMERIC))
}

impl CreateProductRequest {
    pub fn from_body(body: Value) -> Self {
        object_fields(body)
    }

    pub fn to_params(&self) -> Result<CreateProductParams, FieldErrors> {
        validate_request(self)?;
        Ok(CreateProductParams {
            name: field(&self.name, as_text, "name")?,
            price: field(&self.price, as_number, "price")?,
        })
    }
}

impl UpdateProductRequest {
    pub fn from_parts(id: &str, body: Value) -> Self {
        Self {
            id: Value::String(id.to_string()),
            ..object_fields(body)
        }
    }

    pub fn to_params(&self) -> Result<UpdateProductParams, FieldErrors> {
        validate_request(self)?;
        Ok(UpdateProductParams {
            id: field(&self.id, as_id, "id")?,
            name: field(&self.name, as_text, "name")?,
            price: field(&self.price, as_number, "price")?,
            availability: field(&self.availability, as_bool, "availability")?,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Storage-assigned identifier
    pub id: i32,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
    /// Whether the product can be sold
    pub availability: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            availability: product.availability,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// `{"data": <product>}`
#[derive(Debug, Clone, Object)]
pub struct ProductData {
    pub data: ProductResponse,
}

impl From<Product> for ProductData {
    fn from(product: Product) -> Self {
        Self {
            data: product.into(),
        }
    }
}

/// `{"data": [<product>, ...]}`
#[derive(Debug, Clone, Object)]
pub struct ProductListData {
    pub data: Vec<ProductResponse>,
}

/// `{"data": "<message>"}`
#[derive(Debug, Clone, Object)]
pub struct MessageData {
    pub data: String,
}
