//! Resolve the stream ARN of an [Amazon DynamoDB](https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/streamsmain.html)
//! table at deployment-configuration time, so that infrastructure
//! definitions can reference the live attribute instead of a hard-coded
//! value.
//!
//! ## Getting Started
//!
//! A simple example is as follows. Edit your **Cargo.toml** at first.
//!
//! ```toml
//! [dependencies]
//! dynamo-stream-arn = "0.1"
//! tokio = { version = "1", features = ["macros", "rt-multi-thread"] }
//! ```
//!
//! Then in code, assuming that the "People" table exists and its stream is
//! enabled, you can resolve the ARN of that stream with the following.
//!
//! ```rust,no_run
//! use dynamo_stream_arn::{properties::NoProperties, resolver, types::Request, Client};
//!
//! #[tokio::main]
//! async fn main() {
//!     let resolver = resolver::builder()
//!         .client(Client::new())
//!         .build();
//!
//!     let request = Request::new(["People"]);
//!     let resolved = resolver.resolve(&request, &NoProperties).await;
//!
//!     println!("{:#?}", resolved.value);
//! }
//! ```
//!
//! A host configuration system passes its own
//! [`PropertySource`](crate::properties::PropertySource) instead of
//! [`NoProperties`](crate::properties::NoProperties), so the region
//! configured on the deployment provider takes part in the region
//! precedence. The [`resolver`] module documents the full precedence rules.
//!
//! ## Resolution contract
//!
//! [`resolve`](crate::resolver::StreamArnResolver::resolve) never fails:
//! every failure is logged and degrades to an unresolved value. Callers that
//! want the failure itself use
//! [`try_resolve`](crate::resolver::StreamArnResolver::try_resolve).

/// Client for calling AWS APIs.
pub mod client;

/// Common errors.
pub mod error;

/// Configuration property lookups supplied by the host.
pub mod properties;

/// Data structures used by operations.
pub mod types;

/// Implementation for the stream ARN resolution.
pub mod resolver;

pub use client::{Client, DynamodbStreamsClient};
