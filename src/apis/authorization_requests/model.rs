use crate::apis::{customers::Customer, null_as_default, projects::Project};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A pending authorization of a customer's payment source.
///
/// The customer is redirected to [`url`](AuthorizationRequest::url) to go through the flow,
/// and comes back to `return_url` (or `cancel_url`) once done.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthorizationRequest {
    pub id: String,
    /// Only set when `project` is expanded.
    #[serde(default)]
    pub project: Option<Box<Project>>,
    /// Only set when `customer` is expanded.
    #[serde(default)]
    pub customer: Option<Box<Customer>>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency: String,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
    /// Custom variable passed along in events and webhooks.
    pub custom: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sandbox: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(derive(Debug))]
pub struct CreateAuthorizationRequest {
    #[builder(setter(into))]
    pub name: String,
    /// ISO 4217 currency code.
    #[builder(setter(into))]
    pub currency: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

/// Body of [`AuthorizationRequestsApi::create`](crate::apis::authorization_requests::AuthorizationRequestsApi::create).
#[derive(Serialize, Debug)]
pub(crate) struct CreateAuthorizationRequestBody<'a> {
    #[serde(flatten)]
    pub(crate) request: &'a CreateAuthorizationRequest,
    pub(crate) customer_id: &'a str,
}

/// Body of [`AuthorizationRequestsApi::authorize`](crate::apis::authorization_requests::AuthorizationRequestsApi::authorize).
#[derive(Serialize, Debug)]
pub(crate) struct AuthorizeBody<'a> {
    pub(crate) name: &'a str,
    pub(crate) token: &'a str,
}
