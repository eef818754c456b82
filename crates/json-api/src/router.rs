//! App Router

use salvo::Router;

use crate::products;

pub fn app_router() -> Router {
    Router::with_path("api").push(
        Router::with_path("products")
            .get(products::index::handler)
            .post(products::create::handler)
            .push(
                Router::with_path("{id}")
                    .get(products::get::handler)
                    .put(products::update::handler)
                    .delete(products::delete::handler),
            ),
    )
}
