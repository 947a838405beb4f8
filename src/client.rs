//! Module containing the main ProcessOut API client.

use crate::{
    apis::{
        authorization_requests::AuthorizationRequestsApi, customers::CustomersApi,
        tokens::TokensApi, ProcessOutClientInner,
    },
    common::{DEFAULT_API_URL, DEFAULT_API_VERSION},
    credentials::Credentials,
    middlewares::{
        api_version::ApiVersionMiddleware,
        authentication::AuthenticationMiddleware,
        error_handling::ErrorHandlingMiddleware,
        inject_user_agent::InjectUserAgentMiddleware,
        retry_idempotent::{DynRetryPolicy, RetryIdempotentMiddleware},
    },
    Error,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryPolicy};
use reqwest_tracing::TracingMiddleware;
use std::sync::Arc;

/// ProcessOut environment to which a [`ProcessOutClient`](crate::client::ProcessOutClient) connects.
///
/// ProcessOut has one single host: sandbox projects are told apart by their credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Environment {
    /// The public ProcessOut API.
    Live,
    /// Custom base URL, for example a local mock.
    Custom { api_url: Url },
}

impl Environment {
    /// Builds a custom environment sending all requests to `url`.
    pub fn from_single_url(url: &Url) -> Self {
        Environment::Custom {
            api_url: url.clone(),
        }
    }

    /// Base URL of the API.
    pub fn api_url(&self) -> Result<Url, Error> {
        match self {
            Environment::Live => Ok(Url::parse(DEFAULT_API_URL)?),
            Environment::Custom { api_url } => Ok(api_url.clone()),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Live
    }
}

/// Client for ProcessOut public APIs.
///
/// Calls which create resources are sent with an `Idempotency-Key`, generated at random
/// unless one is provided through [`RequestOptions`](crate::options::RequestOptions).
/// Transient failures of idempotent calls are retried according to the configured retry policy.
#[derive(Debug, Clone)]
pub struct ProcessOutClient {
    /// Authorization requests APIs client.
    pub authorization_requests: AuthorizationRequestsApi,
    /// Customers APIs client.
    pub customers: CustomersApi,
    /// Customer tokens APIs client.
    pub tokens: TokensApi,
}

impl ProcessOutClient {
    /// Builds a new [`ProcessOutClient`](crate::client::ProcessOutClient) with the default configuration.
    pub fn new(credentials: Credentials) -> ProcessOutClient {
        ProcessOutClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`ProcessOutClient`](crate::client::ProcessOutClient).
    pub fn builder(credentials: Credentials) -> ProcessOutClientBuilder {
        ProcessOutClientBuilder::new(credentials)
    }
}

/// Builder for a [`ProcessOutClient`](crate::client::ProcessOutClient).
#[derive(Debug)]
pub struct ProcessOutClientBuilder {
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    environment: Environment,
    api_version: String,
    credentials: Credentials,
}

impl ProcessOutClientBuilder {
    /// Creates a new builder to configure a [`ProcessOutClient`](crate::client::ProcessOutClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            retry_policy: Some(DynRetryPolicy(Arc::new(
                ExponentialBackoff::builder().build_with_max_retries(3),
            ))),
            environment: Environment::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            credentials,
        }
    }

    /// Consumes the builder and builds a new [`ProcessOutClient`](crate::client::ProcessOutClient).
    ///
    /// Configuration problems (credentials or API version not representable as
    /// HTTP headers) surface as [`Error::Configuration`](crate::Error) on the first call.
    pub fn build(self) -> ProcessOutClient {
        let client = build_client_with_middleware(
            self.client,
            self.retry_policy,
            &self.credentials,
            &self.api_version,
        );

        let inner = Arc::new(ProcessOutClientInner {
            client,
            environment: self.environment,
        });

        ProcessOutClient {
            authorization_requests: AuthorizationRequestsApi::new(inner.clone()),
            customers: CustomersApi::new(inner.clone()),
            tokens: TokensApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a specific [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying transient failures.
    ///
    /// To disable automatic retrying of failed requests, use `None`.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(DynRetryPolicy);
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Live`](crate::client::Environment::Live).
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the value of the `API-Version` header.
    ///
    /// Defaults to `1.3.0.0`.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<DynRetryPolicy>,
    credentials: &Credentials,
    api_version: &str,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryIdempotentMiddleware::new(retry_policy));
    }

    builder = builder.with(InjectUserAgentMiddleware::new());

    builder = match ApiVersionMiddleware::new(api_version) {
        Ok(middleware) => builder.with(middleware),
        Err(e) => builder.with(FailingMiddleware::from(e)),
    };

    builder = match AuthenticationMiddleware::new(credentials) {
        Ok(middleware) => builder.with(middleware),
        Err(e) => builder.with(FailingMiddleware::from(e)),
    };

    builder.build()
}

/// Stand-in for a middleware whose configuration was invalid: every request fails with the
/// configuration error instead of being sent without the expected headers.
struct FailingMiddleware {
    message: String,
}

impl From<Error> for FailingMiddleware {
    fn from(e: Error) -> Self {
        Self {
            message: match e {
                Error::Configuration(message) => message,
                e => e.to_string(),
            },
        }
    }
}

#[async_trait::async_trait]
impl reqwest_middleware::Middleware for FailingMiddleware {
    async fn handle(
        &self,
        _req: reqwest::Request,
        _extensions: &mut task_local_extensions::Extensions,
        _next: reqwest_middleware::Next<'_>,
    ) -> reqwest_middleware::Result<reqwest::Response> {
        Err(Error::Configuration(self.message.clone()).into())
    }
}
