use anyhow::Context;
use processout_rust::{
    apis::{
        authorization_requests::CreateAuthorizationRequestBuilder,
        customers::CustomerRequestBuilder,
    },
    Credentials, ProcessOutClient, RequestOptions, RequestOptionsBuilder,
};

#[derive(serde::Deserialize, Debug)]
struct Config {
    project_id: String,
    project_secret: String,
    return_url: String,
    cancel_url: String,
}

impl Config {
    fn read() -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PROCESSOUT"))
            .build()?
            .try_deserialize()
            .context("Failed to assemble the required configuration")
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::read()?;

    // Setup ProcessOut client
    let po = ProcessOutClient::new(Credentials::new(config.project_id, config.project_secret));

    // Create a customer to authorize
    let customer = po
        .customers
        .create(
            &CustomerRequestBuilder::default()
                .email("jane.doe@example.com")
                .first_name("Jane")
                .last_name("Doe")
                .build()?,
            &RequestOptions::default(),
        )
        .await?;
    tracing::info!("Created customer {}", customer.id);

    // Create an authorization request for this customer
    let authorization_request = po
        .authorization_requests
        .create(
            &CreateAuthorizationRequestBuilder::default()
                .name("Demo subscription")
                .currency("EUR")
                .return_url(config.return_url)
                .cancel_url(config.cancel_url)
                .build()?,
            &customer.id,
            &RequestOptions::default(),
        )
        .await?;
    tracing::info!(
        "Created authorization request {}. Redirect the customer to: {}",
        authorization_request.id,
        authorization_request.url
    );

    // Fetch it back with the customer expanded
    let fetched = po
        .authorization_requests
        .find(
            &authorization_request.id,
            &RequestOptionsBuilder::default()
                .expand(vec!["customer".to_string()])
                .build()?,
        )
        .await?
        .context("Authorization request not found")?;
    tracing::info!(
        "Authorization request {} belongs to {:?}",
        fetched.id,
        fetched.customer.and_then(|c| c.email)
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!("{:?}", e);
    }
}
