//! Rust client for the [ProcessOut](https://www.processout.com) payments API.
//!
//! The client gives typed, asynchronous access to authorization requests,
//! customers and customer tokens.
//!
//! # Usage
//!
//! ## Initialize a new `ProcessOutClient`
//!
//! Create a new [`ProcessOutClient`](crate::client::ProcessOutClient) with the
//! project ID and project secret found in your ProcessOut dashboard.
//!
//! ```rust,no_run
//! # use processout_rust::{ProcessOutClient, Credentials};
//! let po = ProcessOutClient::builder(Credentials::new(
//!     "test-proj_some-project-id",
//!     "key_some-project-secret",
//! ))
//! .build();
//! ```
//!
//! Credentials can also be read from the `PROCESSOUT_PROJECT_ID` and
//! `PROCESSOUT_PROJECT_SECRET` environment variables with
//! [`Credentials::from_env`](crate::credentials::Credentials::from_env).
//!
//! ## Create an authorization request
//!
//! ```rust,no_run
//! # use processout_rust::{ProcessOutClient, Error, RequestOptions, apis::authorization_requests::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let po: ProcessOutClient = unreachable!();
//! #
//! let create_request = CreateAuthorizationRequestBuilder::default()
//!     .name("Monthly subscription")
//!     .currency("EUR")
//!     .return_url("https://my.shop/return")
//!     .build()
//!     .unwrap();
//!
//! let authorization_request = po
//!     .authorization_requests
//!     .create(&create_request, "cust_some-customer-id", &RequestOptions::default())
//!     .await?;
//!
//! println!("Redirect your customer to: {}", authorization_request.url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Expanding related resources
//!
//! Related resources such as the customer of an authorization request are
//! left empty unless explicitly expanded:
//!
//! ```rust,no_run
//! # use processout_rust::{ProcessOutClient, Error, RequestOptionsBuilder};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let po: ProcessOutClient = unreachable!();
//! #
//! let options = RequestOptionsBuilder::default()
//!     .expand(vec!["customer".to_string()])
//!     .build()
//!     .unwrap();
//!
//! if let Some(authorization_request) = po
//!     .authorization_requests
//!     .find("auth_req_some-id", &options)
//!     .await?
//! {
//!     println!("Customer: {:?}", authorization_request.customer);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for a complete example.
//!
//! ```shell
//! cargo run --example authorization_request
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod credentials;
mod envelope;
pub mod error;
mod middlewares;
pub mod options;

pub use client::ProcessOutClient;
pub use credentials::Credentials;
pub use error::Error;
pub use options::{ListOptions, ListOptionsBuilder, RequestOptions, RequestOptionsBuilder};
