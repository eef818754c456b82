//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::products::{MockProductsService, records::ProductRecord},
};

use crate::state::State;

pub(crate) fn make_product(id: i64) -> ProductRecord {
    ProductRecord {
        id: id.into(),
        name: "Test Product".to_string(),
        description: Some("desc".to_string()),
        price: 10,
        is_show: true,
        category: "Test Category".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
    })
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
