//! List Products Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::ProductsError, responses::ProductResponse},
    state::State,
};

/// List Products Handler
///
/// Returns every product that has not been deleted, oldest first.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ProductsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.app.products.list_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
