use super::{error::Error, types::StreamSummary};

use async_trait::async_trait;
use aws_config::{profile::ProfileFileCredentialsProvider, BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodbstreams::Client as StreamsClient;

/// Client for calling the DynamoDB Streams API.
///
/// Every operation builds its own SDK client, so concurrent resolutions stay
/// independent and each call honors its own region and credential profile.
#[derive(Debug, Clone, Default)]
pub struct Client {
    endpoint_url: Option<String>,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the service endpoint, e.g. for a dynamodb-local instance.
    pub fn endpoint_url(self, endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: Some(endpoint_url.into()),
        }
    }

    /// Build the SDK configuration for a single call. An empty region leaves
    /// the default region chain in charge, an absent profile the default
    /// credential chain. A named profile is attached lazily and only fails
    /// once the provider call runs.
    async fn sdk_config(&self, region: String, profile: Option<String>) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if !region.is_empty() {
            loader = loader.region(Region::new(region));
        }

        if let Some(profile) = profile {
            let credentials = ProfileFileCredentialsProvider::builder()
                .profile_name(profile)
                .build();
            loader = loader.credentials_provider(credentials);
        }

        if let Some(endpoint_url) = self.endpoint_url.as_deref() {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }
}

#[async_trait]
pub trait DynamodbStreamsClient: Send + Sync {
    /// Return the stream descriptors of the table, in provider order.
    async fn list_streams(
        &self,
        table_name: impl Into<String> + Send,
        region: impl Into<String> + Send,
        profile: Option<String>,
    ) -> Result<Vec<StreamSummary>, Error>;
}

#[async_trait]
impl DynamodbStreamsClient for Client {
    async fn list_streams(
        &self,
        table_name: impl Into<String> + Send,
        region: impl Into<String> + Send,
        profile: Option<String>,
    ) -> Result<Vec<StreamSummary>, Error> {
        let config = self.sdk_config(region.into(), profile).await;

        StreamsClient::new(&config)
            .list_streams()
            .table_name(table_name)
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))
            .map(|output| {
                output
                    .streams
                    .unwrap_or_default()
                    .into_iter()
                    .map(StreamSummary::new)
                    .collect()
            })
    }
}
