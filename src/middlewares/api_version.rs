use crate::common::API_VERSION_HEADER;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, ACCEPT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware pinning the API version and asking for JSON responses on every request.
pub struct ApiVersionMiddleware {
    api_version: HeaderValue,
}

impl ApiVersionMiddleware {
    pub fn new(api_version: &str) -> Result<Self, crate::Error> {
        let api_version = HeaderValue::from_str(api_version).map_err(|e| {
            crate::Error::Configuration(format!("invalid API version {:?}: {}", api_version, e))
        })?;

        Ok(Self { api_version })
    }
}

#[async_trait]
impl Middleware for ApiVersionMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(API_VERSION_HEADER, self.api_version.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        next.run(req, extensions).await
    }
}
