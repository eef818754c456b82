//! Product Errors

use salvo::{
    http::{StatusCode, StatusError},
    oapi::{Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use thiserror::Error;
use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

use crate::products::{
    requests::ValidationErrors,
    responses::{MessageResponse, ValidationErrorResponse},
};

pub(crate) const PRODUCT_NOT_FOUND: &str = "Product Not Found";

pub(crate) const INVALID_DATA: &str = "The given data was invalid.";

/// Errors returned by the product endpoints.
#[derive(Debug, Error)]
pub(crate) enum ProductsError {
    #[error("product not found")]
    NotFound,

    #[error("product payload failed validation")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Status(#[from] StatusError),
}

impl ProductsError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProductsError::NotFound => StatusCode::NOT_FOUND,
            ProductsError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ProductsError::Status(status) => status.code,
        }
    }
}

impl From<ProductsServiceError> for ProductsError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::NotFound => ProductsError::NotFound,
            ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
                StatusError::unprocessable_entity()
                    .brief("Invalid product payload")
                    .into()
            }
            ProductsServiceError::Sql(source) => {
                error!("product query failed: {source}");

                StatusError::internal_server_error()
                    .brief("Server Error")
                    .into()
            }
        }
    }
}

impl Scribe for ProductsError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status_code());

        match self {
            ProductsError::NotFound => {
                res.render(Json(MessageResponse::new(PRODUCT_NOT_FOUND)));
            }
            ProductsError::Validation(errors) => {
                res.render(Json(ValidationErrorResponse {
                    message: INVALID_DATA.to_string(),
                    errors: errors.into_map(),
                }));
            }
            ProductsError::Status(status) => {
                res.render(Json(MessageResponse::new(status.brief)));
            }
        }
    }
}

/// Status codes are documented by each endpoint's `responses(...)` block, so
/// only the body schemas are registered here.
impl EndpointOutRegister for ProductsError {
    fn register(components: &mut Components, _operation: &mut Operation) {
        MessageResponse::to_schema(components);
        ValidationErrorResponse::to_schema(components);
    }
}
