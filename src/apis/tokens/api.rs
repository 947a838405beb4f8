use crate::{
    apis::{
        path_segment,
        tokens::{CreateTokenRequest, Token},
        ProcessOutClientInner,
    },
    envelope, Error, RequestOptions,
};
use reqwest::Method;
use std::sync::Arc;

/// ProcessOut customer tokens APIs client.
#[derive(Clone, Debug)]
pub struct TokensApi {
    inner: Arc<ProcessOutClientInner>,
}

impl TokensApi {
    pub(crate) fn new(inner: Arc<ProcessOutClientInner>) -> Self {
        Self { inner }
    }

    /// Finds a customer token by its ID.
    ///
    /// If there's no such token, `None` is returned.
    #[tracing::instrument(name = "Get Token by ID", skip(self, options))]
    pub async fn find(
        &self,
        customer_id: &str,
        token_id: &str,
        options: &RequestOptions,
    ) -> Result<Option<Token>, Error> {
        let res = self
            .inner
            .request(
                Method::GET,
                &format!(
                    "/customers/{}/tokens/{}",
                    path_segment(customer_id)?,
                    path_segment(token_id)?
                ),
                options,
            )?
            .send()
            .await
            .map_err(Error::from);

        // Return `None` if the server returned 404
        let token = match res {
            Ok(res) => Some(envelope::decode(res, "token").await?),
            Err(Error::ApiError(api_error)) if api_error.status == 404 => None,
            Err(e) => return Err(e),
        };

        Ok(token)
    }

    /// Creates a new token for the customer from a payment source.
    #[tracing::instrument(name = "Create Token", skip(self, create_token_request, options))]
    pub async fn create(
        &self,
        customer_id: &str,
        create_token_request: &CreateTokenRequest,
        options: &RequestOptions,
    ) -> Result<Token, Error> {
        let res = self
            .inner
            .request_with_body(
                Method::POST,
                &format!("/customers/{}/tokens", path_segment(customer_id)?),
                create_token_request,
                options,
            )?
            .send()
            .await?;

        envelope::decode(res, "token").await
    }

    /// Deletes a customer token.
    #[tracing::instrument(name = "Delete Token", skip(self, options))]
    pub async fn delete(
        &self,
        customer_id: &str,
        token_id: &str,
        options: &RequestOptions,
    ) -> Result<(), Error> {
        let res = self
            .inner
            .request(
                Method::DELETE,
                &format!(
                    "/customers/{}/tokens/{}",
                    path_segment(customer_id)?,
                    path_segment(token_id)?
                ),
                options,
            )?
            .send()
            .await?;

        envelope::decode_empty(res).await
    }
}
