use crate::common::mock_server::MockServerConfiguration;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, StatusCode},
    Error, HttpResponse,
};
use futures::{
    future::{LocalBoxFuture, Ready},
    FutureExt,
};
use serde_json::json;
use std::{
    future::Future,
    sync::Arc,
    task::{Context, Poll},
};

/// Reason for refusing a request before it reaches the routes.
pub(super) struct Rejection {
    status: StatusCode,
    error_type: &'static str,
    message: String,
}

impl Rejection {
    fn new(status: StatusCode, error_type: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            error_type,
            message: message.into(),
        }
    }

    fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(json!({
            "success": false,
            "error_type": self.error_type,
            "message": self.message,
        }))
    }
}

fn header<'r>(req: &'r ServiceRequest, name: &str) -> Option<&'r str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Middleware to check that all the requests contain the right user agent header
pub(super) async fn validate_user_agent(req: &mut ServiceRequest) -> Result<(), Rejection> {
    if header(req, "User-Agent") != Some(concat!("processout-rust/", env!("CARGO_PKG_VERSION"))) {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "request.invalid-user-agent",
            "Invalid User-Agent",
        ));
    }

    Ok(())
}

/// Middleware to check the API version and content negotiation headers
pub(super) async fn validate_api_version(req: &mut ServiceRequest) -> Result<(), Rejection> {
    if header(req, "API-Version") != Some("1.3.0.0") {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "request.invalid-api-version",
            "Unsupported API version",
        ));
    }

    if header(req, "Accept") != Some("application/json") {
        return Err(Rejection::new(
            StatusCode::NOT_ACCEPTABLE,
            "request.invalid-accept",
            "Only JSON responses are supported",
        ));
    }

    Ok(())
}

/// Ensures that the incoming request has an idempotency key set
pub(super) async fn ensure_idempotency_key(req: &mut ServiceRequest) -> Result<(), Rejection> {
    // Only POSTs are required to carry one
    if req.method() != Method::POST {
        return Ok(());
    }

    if header(req, "Idempotency-Key").map_or(true, str::is_empty) {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "request.idempotency-key.missing",
            "Invalid or missing Idempotency Key",
        ));
    }

    Ok(())
}

/// Validates the basic auth credentials against the configured project
pub(super) fn validate_credentials(
    configuration: MockServerConfiguration,
) -> impl Fn(&mut ServiceRequest) -> LocalBoxFuture<'_, Result<(), Rejection>> {
    let expected = Arc::new(format!(
        "Basic {}",
        base64_encode(&format!(
            "{}:{}",
            configuration.project_id, configuration.project_secret
        ))
    ));

    move |req: &mut ServiceRequest| {
        let expected = expected.clone();

        Box::pin(async move {
            if header(req, "Authorization") != Some(expected.as_str()) {
                return Err(Rejection::new(
                    StatusCode::UNAUTHORIZED,
                    "request.authentication.invalid",
                    "The project credentials are invalid.",
                ));
            }

            Ok(())
        })
    }
}

fn base64_encode(input: &str) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    STANDARD.encode(input)
}

/// Helper trait used to circumvent a limitation of Rust's Higher Ranked Trait Bounds
/// in the implementation of `MiddlewareFnWrapper::call`.
/// For more info see: https://users.rust-lang.org/t/higher-rank-trait-bounds-use-bound-lifetime-in-another-generic/45121
pub(super) trait CallableAsyncFn<'r> {
    type Output: Future<Output = Result<(), Rejection>> + 'r;

    fn call(&self, req: &'r mut ServiceRequest) -> Self::Output;
}

impl<'r, F, R> CallableAsyncFn<'r> for F
where
    F: Fn(&'r mut ServiceRequest) -> R,
    R: Future<Output = Result<(), Rejection>> + 'r,
{
    type Output = R;

    fn call(&self, req: &'r mut ServiceRequest) -> Self::Output {
        self(req)
    }
}

/// Wrapper around a function to act as an actix middleware.
pub(super) struct MiddlewareFn<F> {
    inner: Arc<F>,
}

impl<F> MiddlewareFn<F>
where
    F: for<'r> CallableAsyncFn<'r>,
{
    pub fn new(inner: F) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<S, F> Transform<S, ServiceRequest> for MiddlewareFn<F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
    F: 'static + for<'r> CallableAsyncFn<'r>,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = MiddlewareFnWrapper<S, F>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        futures::future::ok(MiddlewareFnWrapper {
            service: Arc::new(service),
            inner: self.inner.clone(),
        })
    }
}

pub(super) struct MiddlewareFnWrapper<S, F> {
    service: Arc<S>,
    inner: Arc<F>,
}

impl<S, F> Service<ServiceRequest> for MiddlewareFnWrapper<S, F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
    F: 'static + for<'r> CallableAsyncFn<'r>,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ct: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ct)
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let inner = self.inner.clone();
        let service = self.service.clone();

        async move {
            match inner.call(&mut req).await {
                Err(rejection) => Ok(req.into_response(rejection.into_response())),
                Ok(_) => service.call(req).await,
            }
        }
        .boxed_local()
    }
}
