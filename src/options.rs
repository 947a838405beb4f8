//! Per-request options shared by all the ProcessOut APIs.

use derive_builder::Builder;
use serde::Serialize;
use uuid::Uuid;

/// Options applicable to any call.
///
/// ```rust
/// # use processout_rust::RequestOptionsBuilder;
/// let options = RequestOptionsBuilder::default()
///     .idempotency_key("my-key")
///     .expand(vec!["customer".to_string(), "project".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(options.idempotency_key.as_deref(), Some("my-key"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, derive(Debug))]
pub struct RequestOptions {
    /// Sent as `Idempotency-Key`.
    ///
    /// When absent, calls that create resources generate a random key on their own.
    #[builder(setter(into, strip_option))]
    pub idempotency_key: Option<String>,
    /// Names of the related resources the server should inline in the response.
    pub expand: Vec<String>,
}

impl RequestOptions {
    /// Idempotency key to attach to a request which creates a resource.
    pub(crate) fn idempotency_key_or_random(&self) -> String {
        self.idempotency_key
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }
}

/// Sort order of a list.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

/// Pagination options for list endpoints, sent as query parameters.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, derive(Debug))]
pub struct ListOptions {
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[builder(setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_after: Option<String>,
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_before: Option<String>,
}
