//! Clients for the various ProcessOut APIs.

use crate::{
    client::Environment, common::IDEMPOTENCY_KEY_HEADER, options::RequestOptions, Error,
};
use anyhow::anyhow;
use reqwest::{Method, Url};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{
    borrow::Cow,
    fmt::{Debug, Formatter},
};
use urlencoding::encode;

pub mod authorization_requests;
pub mod customers;
pub mod projects;
pub mod tokens;

/// One page of a list of resources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Whether more items are available after the last one of this page.
    pub has_more: bool,
}

pub(crate) struct ProcessOutClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
}

impl Debug for ProcessOutClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessOutClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl ProcessOutClientInner {
    /// Prepares a request without any field other than the ones coming from `options`.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> Result<RequestBuilder, Error> {
        self.request_with_body(method, path, &Map::new(), options)
    }

    /// Prepares a request whose JSON body holds `fields` plus the `expand` list of `options`.
    ///
    /// `POST`s always carry an idempotency key, other methods only when one is given.
    pub(crate) fn request_with_body<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        fields: &B,
        options: &RequestOptions,
    ) -> Result<RequestBuilder, Error> {
        let url = self.url(path)?;
        let body = json_body(fields, options)?;

        let idempotency_key = if method == Method::POST {
            Some(options.idempotency_key_or_random())
        } else {
            options.idempotency_key.clone()
        };

        let mut builder = self.client.request(method, url);
        if let Some(idempotency_key) = idempotency_key {
            builder = builder.header(IDEMPOTENCY_KEY_HEADER, idempotency_key);
        }
        if !body.is_empty() {
            builder = builder.json(&body);
        }

        Ok(builder)
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.environment.api_url()?.join(path)?)
    }
}

/// Percent-encodes a caller-supplied id to be used as one path segment.
///
/// Empty and dot ids are refused, as joining them would resolve to another resource.
pub(crate) fn path_segment(id: &str) -> Result<Cow<'_, str>, Error> {
    if matches!(id, "" | "." | "..") {
        return Err(Error::Other(anyhow!("Invalid resource id: {:?}", id)));
    }

    Ok(encode(id))
}

/// Decodes an explicit `null` as the default value of the field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn json_body<B: Serialize + ?Sized>(
    fields: &B,
    options: &RequestOptions,
) -> Result<Map<String, Value>, Error> {
    let mut body = match serde_json::to_value(fields)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(Error::Other(anyhow!(
                "Request body must be a JSON object, got: {}",
                other
            )))
        }
    };

    if !options.expand.is_empty() {
        body.insert("expand".to_string(), options.expand.clone().into());
    }

    Ok(body)
}
