//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::ProductsError, requests::ProductRequest, responses::ProductResponse},
    state::State,
};

/// Update Product Handler
///
/// The body is validated with the same rules as creation. A `description`
/// key that is left out keeps the stored description.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    request_body = ProductRequest,
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product Not Found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "The given data was invalid."),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ProductsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = ProductRequest::from_request(req).await?;
    let id = id.into_product_id()?;

    let product = state.app.products.get_product(id).await?;

    let updated = state
        .app
        .products
        .update_product(product, request.into())
        .await?;

    Ok(Json(updated.into()))
}
