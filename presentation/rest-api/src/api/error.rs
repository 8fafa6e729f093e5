use poem_openapi::{Object, payload::Json};

use crate::api::validation::{FieldError, FieldErrors};

/// Body of 404 and 500 responses
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Body of 400 responses: every failed rule, not only the first
#[derive(Object, Debug)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl From<FieldErrors> for ValidationErrorResponse {
    fn from(errors: FieldErrors) -> Self {
        Self { errors: errors.0 }
    }
}

/// Error outcome of a handler, before it is placed in the endpoint's response enum
pub enum ApiFailure {
    BadRequest(Json<ValidationErrorResponse>),
    NotFound(Json<ErrorResponse>),
    Internal(Json<ErrorResponse>),
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> ApiFailure;
}
