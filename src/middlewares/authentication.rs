use crate::credentials::Credentials;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use secrecy::ExposeSecret;
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the project credentials into outgoing HTTP requests
/// as an HTTP basic `Authorization` header.
pub struct AuthenticationMiddleware {
    header_value: HeaderValue,
}

impl AuthenticationMiddleware {
    pub fn new(credentials: &Credentials) -> Result<Self, crate::Error> {
        let encoded = STANDARD.encode(format!(
            "{}:{}",
            credentials.project_id(),
            credentials.project_secret().expose_secret()
        ));

        let mut header_value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| crate::Error::Configuration(format!("invalid credentials: {}", e)))?;
        header_value.set_sensitive(true);

        Ok(Self { header_value })
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(AUTHORIZATION, self.header_value.clone());

        next.run(req, extensions).await
    }
}
