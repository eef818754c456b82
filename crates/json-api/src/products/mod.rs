//! Products

mod errors;
mod handlers;
mod requests;
mod responses;

pub(crate) use errors::ProductsError;
pub(crate) use handlers::*;
