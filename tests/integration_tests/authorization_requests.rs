use crate::{common::test_context::TestContext, integration_tests::helpers};
use processout_rust::{
    apis::authorization_requests::{AuthorizationRequest, CreateAuthorizationRequestBuilder},
    Error, RequestOptions, RequestOptionsBuilder,
};

async fn create_authorization_request(
    ctx: &TestContext,
    customer_id: &str,
) -> anyhow::Result<AuthorizationRequest> {
    let authorization_request = ctx
        .client
        .authorization_requests
        .create(
            &CreateAuthorizationRequestBuilder::default()
                .name("Monthly subscription")
                .currency("EUR")
                .return_url("https://my.shop/return")
                .cancel_url("https://my.shop/cancel")
                .custom("order-42")
                .build()?,
            customer_id,
            &RequestOptionsBuilder::default()
                .idempotency_key("create-authorization-request")
                .build()?,
        )
        .await?;

    Ok(authorization_request)
}

#[tokio::test]
async fn create_authorization_request_for_customer() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer(&ctx).await.unwrap();

    let authorization_request = create_authorization_request(&ctx, &customer.id)
        .await
        .unwrap();

    assert!(!authorization_request.id.is_empty());
    assert!(!authorization_request.url.is_empty());
    assert_eq!(authorization_request.name, "Monthly subscription");
    assert_eq!(authorization_request.currency, "EUR");
    assert_eq!(
        authorization_request.return_url.as_deref(),
        Some("https://my.shop/return")
    );
    assert_eq!(
        authorization_request.cancel_url.as_deref(),
        Some("https://my.shop/cancel")
    );
    assert_eq!(authorization_request.custom.as_deref(), Some("order-42"));
    assert!(authorization_request.customer.is_none());
}

#[tokio::test]
async fn create_for_unknown_customer_surfaces_message() {
    let ctx = TestContext::start().await;

    let err = create_authorization_request(&ctx, "cust_unknown")
        .await
        .unwrap_err()
        .downcast::<Error>()
        .unwrap();

    match err {
        Error::ApiError(api_error) => {
            assert_eq!(api_error.status, 404);
            assert_eq!(api_error.message, "The customer could not be found.");
            assert_eq!(
                api_error.error_type.as_deref(),
                Some("resource.customer.not-found")
            );
        }
        e => panic!("Unexpected error: {}", e),
    }
}

#[tokio::test]
async fn find_authorization_request() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer(&ctx).await.unwrap();
    let created = create_authorization_request(&ctx, &customer.id)
        .await
        .unwrap();

    let found = ctx
        .client
        .authorization_requests
        .find(&created.id, &RequestOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, created);

    let expanded = ctx
        .client
        .authorization_requests
        .find(
            &created.id,
            &RequestOptionsBuilder::default()
                .expand(vec!["customer".to_string(), "project".to_string()])
                .build()
                .unwrap(),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(expanded.customer.map(|c| c.id), Some(customer.id));
    assert!(expanded.project.is_some());
}

#[tokio::test]
async fn find_non_existing_authorization_request_returns_none() {
    let ctx = TestContext::start().await;

    let authorization_request = ctx
        .client
        .authorization_requests
        .find("auth_req_missing", &RequestOptions::default())
        .await
        .unwrap();

    assert!(authorization_request.is_none());
}

#[tokio::test]
async fn get_authorization_request_customer() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer(&ctx).await.unwrap();
    let authorization_request = create_authorization_request(&ctx, &customer.id)
        .await
        .unwrap();

    let linked = ctx
        .client
        .authorization_requests
        .customer(&authorization_request, &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(linked, customer);
}

#[tokio::test]
async fn authorize_creates_customer_token() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer(&ctx).await.unwrap();
    let authorization_request = create_authorization_request(&ctx, &customer.id)
        .await
        .unwrap();

    let token = ctx
        .client
        .authorization_requests
        .authorize(
            &authorization_request,
            "stripe",
            "Main card",
            &ctx.gateway_request_token(),
            &RequestOptionsBuilder::default()
                .expand(vec!["customer".to_string()])
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(token.customer_id, customer.id);
    assert_eq!(token.name.as_deref(), Some("Main card"));
    assert_eq!(token.gateway_name.as_deref(), Some("stripe"));
    assert_eq!(token.customer.map(|c| c.id), Some(customer.id.clone()));

    // The new token is now saved on the customer
    let tokens = ctx
        .client
        .customers
        .tokens(&customer, &Default::default(), &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(tokens.items.len(), 1);
    assert_eq!(tokens.items[0].id, token.id);
}

#[tokio::test]
async fn unsuccessful_envelope_with_ok_status_is_an_error() {
    let ctx = TestContext::start().await;
    let customer = helpers::create_customer(&ctx).await.unwrap();
    let authorization_request = create_authorization_request(&ctx, &customer.id)
        .await
        .unwrap();

    let err = ctx
        .client
        .authorization_requests
        .authorize(
            &authorization_request,
            "stripe",
            "Main card",
            "not-a-gateway-token",
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    match err {
        Error::ApiError(api_error) => {
            assert_eq!(api_error.status, 200);
            assert_eq!(api_error.message, "The gateway request token is invalid.");
        }
        e => panic!("Unexpected error: {}", e),
    }
}
