use thiserror::Error as ThisError;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("no table name passed as the first variable parameter")]
    MissingTableName,
    #[error("cannot find dynamodb stream of table {0}, make sure the table exists and its stream is enabled")]
    NotFoundStream(String),
    #[error("could not find stream arn of table {0}")]
    NotFoundStreamArn(String),
    #[error("aws-sdk error: {0}")]
    SdkError(Box<dyn std::error::Error + Send + Sync + 'static>),
}
