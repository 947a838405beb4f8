//! Standard errors used by all functions in the crate.

use std::fmt;

/// Error collecting all possible failures of the ProcessOut client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a ProcessOut API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The response body could not be decoded.
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The client is missing some required configuration.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// ProcessOut HTTP APIs error.
///
/// Built either from a non-2xx HTTP response or from an envelope whose
/// `success` flag is `false`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Human readable message sent back in the envelope.
    pub message: String,
    /// Machine readable error class, e.g. `resource.not-found`.
    pub error_type: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcessOut HTTP error {}: {}", self.status, self.message)?;

        if let Some(ref error_type) = self.error_type {
            write!(f, " ({})", error_type)?;
        }

        Ok(())
    }
}
