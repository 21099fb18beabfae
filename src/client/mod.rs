pub mod error;
pub mod gateway;
pub mod models;

pub use error::GatewayError;
pub use gateway::RequestGateway;
pub use models::{PreviewBody, ResultItem, SearchResponseBody};
