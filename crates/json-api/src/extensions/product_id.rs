//! Product path parameter parsing helpers.

use salvo::oapi::extract::PathParam;

use catalog_app::domain::products::records::ProductId;

use crate::products::ProductsError;

pub(crate) trait ProductIdExt {
    /// Ids that are not integers can never match a product, so they are
    /// reported as missing rather than malformed.
    fn into_product_id(self) -> Result<ProductId, ProductsError>;
}

impl ProductIdExt for PathParam<String> {
    fn into_product_id(self) -> Result<ProductId, ProductsError> {
        self.into_inner()
            .trim()
            .parse::<ProductId>()
            .map_err(|_ignored| ProductsError::NotFound)
    }
}
