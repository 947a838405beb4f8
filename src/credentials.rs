//! Credentials used to authenticate against the ProcessOut APIs.

use crate::{
    common::{PROJECT_ID_ENV, PROJECT_SECRET_ENV},
    Error,
};
use secrecy::Secret;

/// Project credentials, sent as HTTP basic auth on every request.
#[derive(Debug, Clone)]
pub struct Credentials {
    project_id: String,
    project_secret: Secret<String>,
}

impl Credentials {
    pub fn new(project_id: impl Into<String>, project_secret: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            project_secret: Secret::new(project_secret.into()),
        }
    }

    /// Reads the credentials from `PROCESSOUT_PROJECT_ID` and `PROCESSOUT_PROJECT_SECRET`.
    pub fn from_env() -> Result<Self, Error> {
        let read = |name: &str| {
            std::env::var(name)
                .map_err(|_| Error::Configuration(format!("missing environment variable {}", name)))
        };

        Ok(Self::new(read(PROJECT_ID_ENV)?, read(PROJECT_SECRET_ENV)?))
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Project secret, only readable through [`ExposeSecret`](secrecy::ExposeSecret).
    pub fn project_secret(&self) -> &Secret<String> {
        &self.project_secret
    }
}
