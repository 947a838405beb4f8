//! APIs and models related to customer tokens.

mod api;
mod model;

pub use api::TokensApi;
pub use model::*;
