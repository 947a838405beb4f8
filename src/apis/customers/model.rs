use crate::apis::{null_as_default, projects::Project};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A customer of a ProcessOut project.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    /// Only set when `project` is expanded.
    #[serde(default)]
    pub project: Option<Box<Project>>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country_code: Option<String>,
    /// Decimal amount, sent as a string to avoid any loss of precision.
    #[serde(default = "zero_balance", deserialize_with = "balance_or_zero")]
    pub balance: String,
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_pin: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sandbox: bool,
    pub created_at: DateTime<Utc>,
}

fn zero_balance() -> String {
    "0".to_string()
}

fn balance_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(zero_balance))
}

/// Fields of a customer to create or update.
///
/// Unset fields are left untouched by the server.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into, strip_option), derive(Debug))]
pub struct CustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}
