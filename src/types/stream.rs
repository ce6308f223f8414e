use aws_sdk_dynamodbstreams as dynamodbstreams;

/// One stream descriptor of a table, in the order the provider returned it.
#[derive(Debug, Clone)]
pub struct StreamSummary {
    arn: Option<String>,
}

impl StreamSummary {
    pub fn new(stream: dynamodbstreams::types::Stream) -> Self {
        let dynamodbstreams::types::Stream { stream_arn, .. } = stream;

        Self { arn: stream_arn }
    }

    pub fn arn(&self) -> Option<&str> {
        self.arn.as_deref()
    }

    pub fn into_arn(self) -> Option<String> {
        self.arn
    }
}
