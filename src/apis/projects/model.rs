use crate::apis::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ProcessOut project, owner of every other resource.
///
/// Only ever returned expanded inside other resources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub logo_url: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}
