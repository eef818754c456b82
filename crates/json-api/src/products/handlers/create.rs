//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    extensions::*,
    products::{errors::ProductsError, requests::ProductRequest, responses::ProductResponse},
    state::State,
};

/// Create Product Handler
///
/// Expects a JSON object with `name`, `price`, `is_show` and `category`, and
/// an optional `description`.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    request_body = ProductRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "The given data was invalid."),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ProductsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = ProductRequest::from_request(req).await?;

    let product = state.app.products.create_product(request.into()).await?;

    res.add_header(LOCATION, format!("/api/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
