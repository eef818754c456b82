//! Product Responses

use std::{collections::BTreeMap, string::ToString};

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::ProductRecord;

/// Product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i64,

    /// Display name, at most 100 characters
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// The price of the product
    pub price: i64,

    /// Whether the product is shown to customers
    pub is_show: bool,

    /// Category the product is listed under
    pub category: String,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            description: product.description,
            price: product.price,
            is_show: product.is_show,
            category: product.category,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Message Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Validation Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidationErrorResponse {
    /// Summary of the failure
    pub message: String,

    /// Messages for every field that failed validation, keyed by field name
    pub errors: BTreeMap<String, Vec<String>>,
}
