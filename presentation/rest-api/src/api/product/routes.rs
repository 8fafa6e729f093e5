use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use serde_json::Value;

use business::domain::product::model::ProductId;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::toggle_availability::{
    ToggleAvailabilityParams, ToggleAvailabilityUseCase,
};
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::api::error::{
    ApiFailure, ErrorResponse, IntoErrorResponse, ValidationErrorResponse,
};
use crate::api::product::dto::{
    CreateProductRequest, MessageData, PRODUCT_DELETED, ProductData, ProductListData, ProductPath,
    UpdateProductRequest,
};
use crate::api::tags::ApiTags;
use crate::api::validation::FieldErrors;

/// Validates the id shared by get, toggle and delete.
fn validated_id(raw: &str) -> Result<ProductId, FieldErrors> {
    ProductPath::new(raw).to_id()
}

fn bad_request(errors: FieldErrors) -> Json<ValidationErrorResponse> {
    Json(errors.into())
}

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    toggle_availability_use_case: Arc<dyn ToggleAvailabilityUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        toggle_availability_use_case: Arc<dyn ToggleAvailabilityUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            toggle_availability_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, toggling and deleting products.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Returns every product, most expensive first.
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(ProductListData {
                data: products.into_iter().map(|p| p.into()).collect(),
            })),
            Err(err) => match err.into_error_response() {
                ApiFailure::Internal(json) | ApiFailure::NotFound(json) => {
                    GetAllProductsResponse::InternalError(json)
                }
                ApiFailure::BadRequest(_) => GetAllProductsResponse::InternalError(Json(
                    ErrorResponse::new(super::error_mapper::INTERNAL_ERROR),
                )),
            },
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product by its identifier.
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match validated_id(&id.0) {
            Ok(id) => id,
            Err(errors) => return GetProductByIdResponse::BadRequest(bad_request(errors)),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => match err.into_error_response() {
                ApiFailure::BadRequest(json) => GetProductByIdResponse::BadRequest(json),
                ApiFailure::NotFound(json) => GetProductByIdResponse::NotFound(json),
                ApiFailure::Internal(json) => GetProductByIdResponse::InternalError(json),
            },
        }
    }

    /// Create a new product
    ///
    /// Availability of a new product is always `true`.
    #[oai(path = "/api/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<Value>) -> CreateProductResponse {
        let params = match CreateProductRequest::from_body(body.0).to_params() {
            Ok(params) => params,
            Err(errors) => return CreateProductResponse::BadRequest(bad_request(errors)),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => match err.into_error_response() {
                ApiFailure::BadRequest(json) => CreateProductResponse::BadRequest(json),
                ApiFailure::NotFound(json) | ApiFailure::Internal(json) => {
                    CreateProductResponse::InternalError(json)
                }
            },
        }
    }

    /// Update a product
    ///
    /// Replaces name, price and availability of an existing product.
    #[oai(path = "/api/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(&self, id: Path<String>, body: Json<Value>) -> UpdateProductResponse {
        let params = match UpdateProductRequest::from_parts(&id.0, body.0).to_params() {
            Ok(params) => params,
            Err(errors) => return UpdateProductResponse::BadRequest(bad_request(errors)),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => match err.into_error_response() {
                ApiFailure::BadRequest(json) => UpdateProductResponse::BadRequest(json),
                ApiFailure::NotFound(json) => UpdateProductResponse::NotFound(json),
                ApiFailure::Internal(json) => UpdateProductResponse::InternalError(json),
            },
        }
    }

    /// Toggle product availability
    ///
    /// Flips the `availability` flag; nothing else changes.
    #[oai(path = "/api/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn toggle_availability(&self, id: Path<String>) -> ToggleAvailabilityResponse {
        let id = match validated_id(&id.0) {
            Ok(id) => id,
            Err(errors) => return ToggleAvailabilityResponse::BadRequest(bad_request(errors)),
        };

        match self
            .toggle_availability_use_case
            .execute(ToggleAvailabilityParams { id })
            .await
        {
            Ok(product) => ToggleAvailabilityResponse::Ok(Json(product.into())),
            Err(err) => match err.into_error_response() {
                ApiFailure::BadRequest(json) => ToggleAvailabilityResponse::BadRequest(json),
                ApiFailure::NotFound(json) => ToggleAvailabilityResponse::NotFound(json),
                ApiFailure::Internal(json) => ToggleAvailabilityResponse::InternalError(json),
            },
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product.
    #[oai(path = "/api/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match validated_id(&id.0) {
            Ok(id) => id,
            Err(errors) => return DeleteProductResponse::BadRequest(bad_request(errors)),
        };

        match self.delete_use_case.execute(DeleteProductParams { id }).await {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageData {
                data: PRODUCT_DELETED.to_string(),
            })),
            Err(err) => match err.into_error_response() {
                ApiFailure::BadRequest(json) => DeleteProductResponse::BadRequest(json),
                ApiFailure::NotFound(json) => DeleteProductResponse::NotFound(json),
                ApiFailure::Internal(json) => DeleteProductResponse::InternalError(json),
            },
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListData>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductData>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductData>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductData>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ToggleAvailabilityResponse {
    #[oai(status = 200)]
    Ok(Json<ProductData>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageData>),
    #[oai(status = 400)]
    BadRequest(Json<ValidationErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
