use crate::{envelope::Envelope, error::ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from ProcessOut APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await?;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

async fn api_error_from_response(response: Response) -> reqwest_middleware::Result<ApiError> {
    let status = response.status();

    // Parse the response body as an envelope, falling back to the status reason
    let bytes = response.bytes().await?;
    let api_error = match serde_json::from_slice::<Envelope>(&bytes) {
        Ok(envelope) if envelope.message.is_some() => envelope.into_api_error(status.as_u16()),
        _ => ApiError {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("server_error")
                .to_string(),
            error_type: None,
        },
    };

    Ok(api_error)
}
