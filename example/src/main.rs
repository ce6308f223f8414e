use dynamo_stream_arn::{properties::NoProperties, resolver, types::Request, Client};
use tracing_subscriber::FmtSubscriber;

// This example assumes that the dynamodb-local instance is running on localhost:8000
// and "People" table exists with its stream enabled.

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let client = Client::new().endpoint_url("http://localhost:8000");
    let resolver = resolver::builder().client(client).build();

    let resolved = resolver
        .resolve(&Request::new(["People"]), &NoProperties)
        .await;

    println!("{:#?}", resolved);
}
