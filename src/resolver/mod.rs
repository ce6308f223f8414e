//! # StreamArnResolver
//!
//! [`StreamArnResolver`](crate::resolver::StreamArnResolver) resolves the stream ARN of a DynamoDB
//! table so that deployment configuration can reference the live attribute
//! instead of a hard-coded value.
//!
//! ```rust,no_run
//! use dynamo_stream_arn::{properties::NoProperties, resolver, types::Request, Client};
//!
//! # async fn wrapper() {
//! // Create a resolver from builder.
//! let resolver = resolver::builder()
//!     .client(Client::new())
//!     .build();
//!
//! // Resolve the variable. A failed resolution is logged and yields
//! // `value: None`, it never fails past this call.
//! let request = Request::new(["People"]);
//! let resolved = resolver.resolve(&request, &NoProperties).await;
//! println!("{:#?}", resolved.value);
//! # }
//! ```
//!
//! ## Region and profile precedence
//!
//! The effective region is the first present value among the command line
//! region override, the region configured on the deployment provider (read
//! through [`PropertySource`](crate::properties::PropertySource)), and the
//! second positional parameter of the variable; when all are absent, the
//! provider default region behavior applies. The credential profile mirrors
//! this: the command line `aws-profile` option first, then the provider
//! settings profile, then the ambient `AWS_PROFILE` variable.
//!
//! ```rust,no_run
//! use dynamo_stream_arn::{properties::NoProperties, resolver, types::Request, Client};
//!
//! # async fn wrapper() {
//! let resolver = resolver::builder()
//!     .client(Client::new())
//!     .region("eu-west-1")
//!     .profile("staging")
//!     .build();
//!
//! let resolved = resolver
//!     .resolve(&Request::new(["People"]), &NoProperties)
//!     .await;
//! println!("{:#?}", resolved.value);
//! # }
//! ```

mod stream_arn;

use super::{client::DynamodbStreamsClient, error::Error, properties::PropertySource, types};

pub use stream_arn::{StreamArnResolver, StreamArnResolverBuilder, ENV_AWS_PROFILE};

/// Create [`StreamArnResolverBuilder`].
pub fn builder<C: DynamodbStreamsClient>() -> StreamArnResolverBuilder<C> {
    StreamArnResolverBuilder::new()
}
