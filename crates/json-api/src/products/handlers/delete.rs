//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::errors::ProductsError, state::State};

/// Delete Product Handler
///
/// Soft deletes the product. It is hidden from every endpoint afterwards.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product Not Found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, ProductsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_product_id()?;

    let product = state.app.products.get_product(id).await?;

    state.app.products.delete_product(product).await?;

    Ok(StatusCode::NO_CONTENT)
}
