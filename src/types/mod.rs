mod outputs;
mod request;
mod stream;

pub use outputs::ResolvedVariable;
pub use request::Request;
pub use stream::StreamSummary;
