//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::ProductsError, responses::ProductResponse},
    state::State,
};

/// Get Product Handler
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product Not Found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ProductsError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_product_id()?;

    let product = state.app.products.get_product(id).await?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use catalog_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("api/products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(1))
            .return_once(|_| Ok(make_product(1)));

        let mut res = TestClient::get("http://example.com/api/products/1")
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 1);
        assert_eq!(body.description.as_deref(), Some("desc"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_product_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(999))
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let mut res = TestClient::get("http://example.com/api/products/999")
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body, json!({ "message": "Product Not Found" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_get_product().never();

        let mut res = TestClient::get("http://example.com/api/products/abc")
            .send(&make_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body, json!({ "message": "Product Not Found" }));

        Ok(())
    }
}
