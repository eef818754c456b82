//! Test Helpers

use crate::domain::products::data::NewProduct;

pub(crate) fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: Some("desc".to_string()),
        price: 10,
        is_show: true,
        category: "Test Category".to_string(),
    }
}
