use crate::apis::{customers::Customer, null_as_default};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payment source of a customer saved on a gateway, reusable for later charges.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    /// Only set when `customer` is expanded.
    #[serde(default)]
    pub customer: Option<Box<Customer>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_id: String,
    pub name: Option<String>,
    pub gateway_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_subscription_only: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(derive(Debug))]
pub struct CreateTokenRequest {
    /// Card ID or gateway request token the new token is created from.
    #[builder(setter(into))]
    pub source: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}
