//! Products Data

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub is_show: bool,
    pub category: String,
}

/// Product Update Data
///
/// Fields left as `None` keep their stored value. `description` is doubly
/// optional: `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<i64>,
    pub is_show: Option<bool>,
    pub category: Option<String>,
}

impl From<NewProduct> for ProductUpdate {
    fn from(product: NewProduct) -> Self {
        ProductUpdate {
            name: Some(product.name),
            description: Some(product.description),
            price: Some(product.price),
            is_show: Some(product.is_show),
            category: Some(product.category),
        }
    }
}
