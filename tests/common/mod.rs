use aws_config::{retry::RetryConfig, BehaviorVersion, Region, SdkConfig};
use aws_credential_types::{provider::SharedCredentialsProvider, Credentials};
use aws_sdk_dynamodb::{
    types::{
        AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
        StreamSpecification, StreamViewType,
    },
    Client,
};
use std::env;

pub const ENDPOINT_URL: &str = "http://localhost:8000";

const STREAMING_TABLE: &str = "People";
const PLAIN_TABLE: &str = "Audit";
const PK: &str = "Id";
const REGION: &str = "us-east-1";

pub struct TestConfig {
    streaming_table: String,
    plain_table: String,
    region: String,
    config: SdkConfig,
}

impl TestConfig {
    pub fn streaming_table(&self) -> &str {
        self.streaming_table.as_str()
    }

    pub fn plain_table(&self) -> &str {
        self.plain_table.as_str()
    }

    pub fn region(&self) -> &str {
        self.region.as_str()
    }

    pub fn aws_sdk_config(&self) -> &SdkConfig {
        &self.config
    }
}

pub async fn setup() -> TestConfig {
    // The resolver under test builds its own SDK configuration from the
    // ambient chain, so the fake credentials go through the environment.
    env::set_var("AWS_ACCESS_KEY_ID", "local");
    env::set_var("AWS_SECRET_ACCESS_KEY", "local");
    env::remove_var("AWS_PROFILE");

    let creds = Credentials::from_keys("local", "local", None);
    let creds_provider = SharedCredentialsProvider::new(creds);

    let retry = RetryConfig::standard().with_max_attempts(5);

    let config = SdkConfig::builder()
        .endpoint_url(ENDPOINT_URL)
        .credentials_provider(creds_provider)
        .retry_config(retry)
        .behavior_version(BehaviorVersion::latest())
        .region(Some(Region::from_static(REGION)))
        .build();

    create_tables(&config).await;

    TestConfig {
        streaming_table: STREAMING_TABLE.to_string(),
        plain_table: PLAIN_TABLE.to_string(),
        region: REGION.to_string(),
        config,
    }
}

pub async fn teardown(config: &SdkConfig) {
    let client = Client::new(config);

    for table in [STREAMING_TABLE, PLAIN_TABLE] {
        client
            .delete_table()
            .table_name(table)
            .send()
            .await
            .unwrap();
    }
}

pub async fn latest_stream_arn(config: &SdkConfig) -> Option<String> {
    Client::new(config)
        .describe_table()
        .table_name(STREAMING_TABLE)
        .send()
        .await
        .unwrap()
        .table
        .and_then(|table| table.latest_stream_arn)
}

async fn create_tables(config: &SdkConfig) {
    let client = Client::new(config);

    client
        .create_table()
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(PK)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .table_name(STREAMING_TABLE)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(PK)
                .key_type(KeyType::Hash)
                .build()
                .unwrap(),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .stream_specification(
            StreamSpecification::builder()
                .stream_enabled(true)
                .stream_view_type(StreamViewType::NewImage)
                .build()
                .unwrap(),
        )
        .send()
        .await
        .unwrap();

    client
        .create_table()
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(PK)
                .attribute_type(ScalarAttributeType::S)
                .build()
                .unwrap(),
        )
        .table_name(PLAIN_TABLE)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(PK)
                .key_type(KeyType::Hash)
                .build()
                .unwrap(),
        )
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await
        .unwrap();
}
