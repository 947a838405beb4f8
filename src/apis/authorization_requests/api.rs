use super::model::{AuthorizeBody, CreateAuthorizationRequestBody};
use crate::{
    apis::{
        authorization_requests::{AuthorizationRequest, CreateAuthorizationRequest},
        customers::Customer,
        path_segment,
        tokens::Token,
        ProcessOutClientInner,
    },
    envelope, Error, RequestOptions,
};
use reqwest::Method;
use std::sync::Arc;

/// ProcessOut authorization requests APIs client.
#[derive(Clone, Debug)]
pub struct AuthorizationRequestsApi {
    inner: Arc<ProcessOutClientInner>,
}

impl AuthorizationRequestsApi {
    pub(crate) fn new(inner: Arc<ProcessOutClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the customer linked to the authorization request.
    #[tracing::instrument(
        name = "Get Authorization Request Customer",
        skip(self, authorization_request, options),
        fields(authorization_request_id = %authorization_request.id)
    )]
    pub async fn customer(
        &self,
        authorization_request: &AuthorizationRequest,
        options: &RequestOptions,
    ) -> Result<Customer, Error> {
        let res = self
            .inner
            .request(
                Method::GET,
                &format!(
                    "/authorization-requests/{}/customers",
                    path_segment(&authorization_request.id)?
                ),
                options,
            )?
            .send()
            .await?;

        envelope::decode(res, "customer").await
    }

    /// Authorizes (creates) a new customer token on the given gateway.
    ///
    /// `token` is the gateway request token obtained client-side once the customer
    /// went through the authorization flow.
    #[tracing::instrument(
        name = "Authorize Authorization Request",
        skip(self, authorization_request, token, options),
        fields(authorization_request_id = %authorization_request.id)
    )]
    pub async fn authorize(
        &self,
        authorization_request: &AuthorizationRequest,
        gateway_name: &str,
        name: &str,
        token: &str,
        options: &RequestOptions,
    ) -> Result<Token, Error> {
        let res = self
            .inner
            .request_with_body(
                Method::POST,
                &format!(
                    "/authorization-requests/{}/gateways/{}/tokens",
                    path_segment(&authorization_request.id)?,
                    path_segment(gateway_name)?
                ),
                &AuthorizeBody { name, token },
                options,
            )?
            .send()
            .await?;

        envelope::decode(res, "token").await
    }

    /// Creates a new authorization request for the given customer ID.
    #[tracing::instrument(
        name = "Create Authorization Request",
        skip(self, create_request, options),
        fields(currency = %create_request.currency)
    )]
    pub async fn create(
        &self,
        create_request: &CreateAuthorizationRequest,
        customer_id: &str,
        options: &RequestOptions,
    ) -> Result<AuthorizationRequest, Error> {
        let res = self
            .inner
            .request_with_body(
                Method::POST,
                "/authorization-requests",
                &CreateAuthorizationRequestBody {
                    request: create_request,
                    customer_id,
                },
                options,
            )?
            .send()
            .await?;

        envelope::decode(res, "authorization_request").await
    }

    /// Finds an authorization request by its ID.
    ///
    /// If there's no authorization request with the given id, `None` is returned.
    #[tracing::instrument(name = "Get Authorization Request by ID", skip(self, options))]
    pub async fn find(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Option<AuthorizationRequest>, Error> {
        let res = self
            .inner
            .request(
                Method::GET,
                &format!("/authorization-requests/{}", path_segment(id)?),
                options,
            )?
            .send()
            .await
            .map_err(Error::from);

        // Return `None` if the server returned 404
        let authorization_request = match res {
            Ok(res) => Some(envelope::decode(res, "authorization_request").await?),
            Err(Error::ApiError(api_error)) if api_error.status == 404 => None,
            Err(e) => return Err(e),
        };

        Ok(authorization_request)
    }
}
