use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ApiFailure, ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{INVALID_PRICE, NAME_EMPTY};
use crate::api::validation::FieldErrors;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> ApiFailure {
        match self {
            ProductError::NameEmpty => ApiFailure::BadRequest(Json(
                FieldErrors::single("name", NAME_EMPTY).into(),
            )),
            ProductError::InvalidPrice => ApiFailure::BadRequest(Json(
                FieldErrors::single("price", INVALID_PRICE).into(),
            )),
            ProductError::NotFound => {
                ApiFailure::NotFound(Json(ErrorResponse::new(PRODUCT_NOT_FOUND)))
            }
            ProductError::Repository(err) => {
                tracing::error!(error = %err, "Product request failed in storage");
                ApiFailure::Internal(Json(ErrorResponse::new(INTERNAL_ERROR)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_domain_validation_to_field_errors() {
        let ApiFailure::BadRequest(Json(body)) = ProductError::InvalidPrice.into_error_response()
        else {
            panic!("expected a bad request");
        };

        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].field, "price");
        assert_eq!(body.errors[0].message, INVALID_PRICE);
    }

    #[test]
    fn should_hide_storage_details() {
        let failure = ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        let ApiFailure::Internal(Json(body)) = failure else {
            panic!("expected an internal error");
        };
        assert_eq!(body.error, INTERNAL_ERROR);
    }

    #[test]
    fn should_map_missing_product_to_not_found() {
        assert!(matches!(
            ProductError::NotFound.into_error_response(),
            ApiFailure::NotFound(_)
        ));
    }
}
