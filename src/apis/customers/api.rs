use crate::{
    apis::{
        customers::{Customer, CustomerRequest},
        path_segment,
        tokens::Token,
        Page, ProcessOutClientInner,
    },
    envelope, Error, ListOptions, RequestOptions,
};
use reqwest::Method;
use std::sync::Arc;

/// ProcessOut customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<ProcessOutClientInner>,
}

impl CustomersApi {
    pub(crate) fn new(inner: Arc<ProcessOutClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the customers of the project.
    #[tracing::instrument(name = "List Customers", skip(self, options))]
    pub async fn all(
        &self,
        list_options: &ListOptions,
        options: &RequestOptions,
    ) -> Result<Page<Customer>, Error> {
        let res = self
            .inner
            .request(Method::GET, "/customers", options)?
            .query(list_options)
            .send()
            .await?;

        envelope::decode_page(res, "customers").await
    }

    /// Creates a new customer.
    #[tracing::instrument(name = "Create Customer", skip_all)]
    pub async fn create(
        &self,
        customer_request: &CustomerRequest,
        options: &RequestOptions,
    ) -> Result<Customer, Error> {
        let res = self
            .inner
            .request_with_body(Method::POST, "/customers", customer_request, options)?
            .send()
            .await?;

        envelope::decode(res, "customer").await
    }

    /// Finds a customer by its ID.
    ///
    /// If there's no customer with the given id, `None` is returned.
    #[tracing::instrument(name = "Get Customer by ID", skip(self, options))]
    pub async fn find(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<Option<Customer>, Error> {
        let res = self
            .inner
            .request(
                Method::GET,
                &format!("/customers/{}", path_segment(id)?),
                options,
            )?
            .send()
            .await
            .map_err(Error::from);

        // Return `None` if the server returned 404
        let customer = match res {
            Ok(res) => Some(envelope::decode(res, "customer").await?),
            Err(Error::ApiError(api_error)) if api_error.status == 404 => None,
            Err(e) => return Err(e),
        };

        Ok(customer)
    }

    /// Updates the fields set in `customer_request` on an existing customer.
    #[tracing::instrument(name = "Save Customer", skip(self, customer_request, options))]
    pub async fn save(
        &self,
        id: &str,
        customer_request: &CustomerRequest,
        options: &RequestOptions,
    ) -> Result<Customer, Error> {
        let res = self
            .inner
            .request_with_body(
                Method::PUT,
                &format!("/customers/{}", path_segment(id)?),
                customer_request,
                options,
            )?
            .send()
            .await?;

        envelope::decode(res, "customer").await
    }

    /// Deletes a customer.
    #[tracing::instrument(name = "Delete Customer", skip(self, options))]
    pub async fn delete(&self, id: &str, options: &RequestOptions) -> Result<(), Error> {
        let res = self
            .inner
            .request(
                Method::DELETE,
                &format!("/customers/{}", path_segment(id)?),
                options,
            )?
            .send()
            .await?;

        envelope::decode_empty(res).await
    }

    /// Lists the tokens saved for the customer.
    #[tracing::instrument(
        name = "List Customer Tokens",
        skip(self, customer, options),
        fields(customer_id = %customer.id)
    )]
    pub async fn tokens(
        &self,
        customer: &Customer,
        list_options: &ListOptions,
        options: &RequestOptions,
    ) -> Result<Page<Token>, Error> {
        let res = self
            .inner
            .request(
                Method::GET,
                &format!("/customers/{}/tokens", path_segment(&customer.id)?),
                options,
            )?
            .query(list_options)
            .send()
            .await?;

        envelope::decode_page(res, "tokens").await
    }
}
