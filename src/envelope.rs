//! Decoding of the `{success, message, <resource>}` wrapper returned by every endpoint.

use crate::{apis::Page, error::ApiError, Error};
use anyhow::anyhow;
use reqwest::Response;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub(crate) success: bool,
    pub(crate) message: Option<String>,
    pub(crate) error_type: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Envelope {
    /// Parses an envelope and fails with an [`ApiError`] if it is not successful.
    pub(crate) fn parse(status: u16, bytes: &[u8]) -> Result<Self, Error> {
        let envelope: Envelope = serde_json::from_slice(bytes)?;

        if !envelope.success {
            return Err(envelope.into_api_error(status).into());
        }

        Ok(envelope)
    }

    pub(crate) fn into_api_error(self, status: u16) -> ApiError {
        ApiError {
            status,
            message: self.message.unwrap_or_else(|| "unknown error".to_string()),
            error_type: self.error_type,
        }
    }

    /// Removes the resource stored under `key` and decodes it.
    pub(crate) fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, Error> {
        let value = self
            .fields
            .remove(key)
            .filter(|v| !v.is_null())
            .ok_or_else(|| Error::Other(anyhow!("Missing `{}` in response", key)))?;

        Ok(serde_json::from_value(value)?)
    }

    fn has_more(&self) -> bool {
        self.fields
            .get("has_more")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

async fn read(response: Response) -> Result<Envelope, Error> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;

    Envelope::parse(status, &bytes)
}

/// Decodes the resource stored under `key`.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response, key: &str) -> Result<T, Error> {
    read(response).await?.take(key)
}

/// Decodes a list of resources stored under `key`.
pub(crate) async fn decode_page<T: DeserializeOwned>(
    response: Response,
    key: &str,
) -> Result<Page<T>, Error> {
    let mut envelope = read(response).await?;

    Ok(Page {
        has_more: envelope.has_more(),
        items: envelope.take(key)?,
    })
}

/// Checks that an envelope without a resource is successful.
pub(crate) async fn decode_empty(response: Response) -> Result<(), Error> {
    read(response).await.map(|_| ())
}
