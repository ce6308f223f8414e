use super::{
    types::{Request, ResolvedVariable, StreamSummary},
    DynamodbStreamsClient, Error, PropertySource,
};

use std::env;
use tracing::{error, info};

/// Environment variable consulted for the ambient credential profile when no
/// higher-precedence profile source is present.
pub const ENV_AWS_PROFILE: &str = "AWS_PROFILE";

/// Path of the region configured on the deployment provider, as the host
/// configuration tree spells it.
const PROVIDER_REGION_PATH: [&str; 2] = ["provider", "region"];

/// Resolve the stream ARN of a DynamoDB table as a configuration variable.
///
/// The resolver holds the deployment-level hints (command line region and
/// profile overrides, the provider settings profile) and performs one
/// `ListStreams` call per resolution through its [`DynamodbStreamsClient`].
#[derive(Debug)]
pub struct StreamArnResolver<Client>
where
    Client: DynamodbStreamsClient,
{
    client: Client,
    region: Option<String>,
    profile: Option<String>,
    provider_profile: Option<String>,
}

impl<Client> StreamArnResolver<Client>
where
    Client: DynamodbStreamsClient,
{
    /// Resolve the stream ARN of the table named by the request.
    ///
    /// This is the host-facing boundary: every failure is logged and
    /// converted into an unresolved [`ResolvedVariable`], so resolution
    /// never fails the enclosing configuration pipeline.
    pub async fn resolve<P>(&self, request: &Request, properties: &P) -> ResolvedVariable
    where
        P: PropertySource + ?Sized,
    {
        match self.try_resolve(request, properties).await {
            Ok(arn) => ResolvedVariable { value: Some(arn) },
            Err(err) => {
                error!("Unexpected error during stream arn resolution: {err}");
                ResolvedVariable { value: None }
            }
        }
    }

    /// Resolve the stream ARN, surfacing failures as [`Error`] values
    /// instead of degrading to an unresolved variable.
    pub async fn try_resolve<P>(&self, request: &Request, properties: &P) -> Result<String, Error>
    where
        P: PropertySource + ?Sized,
    {
        let table_name = request.table_name().ok_or(Error::MissingTableName)?;

        let configured_region = properties.resolve_property(&PROVIDER_REGION_PATH).await;
        let region = self.effective_region(configured_region, request.region_param());
        let profile = self.effective_profile(env::var(ENV_AWS_PROFILE).ok());

        info!(
            "Fetching streams of {} table in region {:?}",
            table_name, region
        );

        let streams = self.client.list_streams(table_name, region, profile).await?;
        let arn = extract_stream_arn(streams, table_name)?;

        info!("Fetched stream of {} table => {}", table_name, arn);

        Ok(arn)
    }

    /// The effective region: the command line override first, then the
    /// region configured on the deployment provider, then the positional
    /// parameter. Empty means the provider default applies.
    fn effective_region(&self, configured: Option<String>, positional: Option<&str>) -> String {
        first_present([
            self.region.clone(),
            configured,
            positional.map(String::from),
        ])
        .unwrap_or_default()
    }

    /// The effective credential profile: the command line override first,
    /// then the profile from the provider settings, then the ambient one.
    /// `None` leaves the default credential chain in charge.
    fn effective_profile(&self, ambient: Option<String>) -> Option<String> {
        first_present([
            self.profile.clone(),
            self.provider_profile.clone(),
            ambient,
        ])
    }
}

/// First present, non-empty value from the ordered sources.
fn first_present(sources: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    sources
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

/// Take the first descriptor in provider order and extract its ARN.
fn extract_stream_arn(streams: Vec<StreamSummary>, table_name: &str) -> Result<String, Error> {
    let stream = streams
        .into_iter()
        .next()
        .ok_or_else(|| Error::NotFoundStream(table_name.to_string()))?;

    stream
        .into_arn()
        .filter(|arn| !arn.is_empty())
        .ok_or_else(|| Error::NotFoundStreamArn(table_name.to_string()))
}

/// A builder for [`StreamArnResolver`].
#[derive(Debug)]
pub struct StreamArnResolverBuilder<Client>
where
    Client: DynamodbStreamsClient,
{
    client: Option<Client>,
    region: Option<String>,
    profile: Option<String>,
    provider_profile: Option<String>,
}

impl<Client> StreamArnResolverBuilder<Client>
where
    Client: DynamodbStreamsClient,
{
    /// Create a new `StreamArnResolverBuilder`.
    pub fn new() -> Self {
        Self {
            client: None,
            region: None,
            profile: None,
            provider_profile: None,
        }
    }

    /// Set client to call AWS APIs.
    ///
    /// **Setting any client is required** before the build method is called.
    pub fn client(self, client: Client) -> Self {
        Self {
            client: Some(client),
            ..self
        }
    }

    /// Set the region override, usually the region option of the deployment
    /// command line. It wins over every other region source.
    pub fn region(self, region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..self
        }
    }

    /// Set the profile override, usually the `aws-profile` option of the
    /// deployment command line. It wins over every other profile source.
    pub fn profile(self, profile: impl Into<String>) -> Self {
        Self {
            profile: Some(profile.into()),
            ..self
        }
    }

    /// Set the profile configured on the provider settings of the
    /// deployment. It is consulted when no profile override is given.
    pub fn provider_profile(self, provider_profile: impl Into<String>) -> Self {
        Self {
            provider_profile: Some(provider_profile.into()),
            ..self
        }
    }

    /// Consumes the builder and constructs a [`StreamArnResolver`].
    ///
    /// This method will panic if no client is set.
    pub fn build(self) -> StreamArnResolver<Client> {
        StreamArnResolver {
            client: self.client.expect("`client` is required"),
            region: self.region,
            profile: self.profile,
            provider_profile: self.provider_profile,
        }
    }
}

impl<Client> Default for StreamArnResolverBuilder<Client>
where
    Client: DynamodbStreamsClient,
{
    fn default() -> Self {
        Self::new()
    }
}
