//! APIs and models related to authorization requests.

mod api;
mod model;

pub use api::AuthorizationRequestsApi;
pub use model::*;
