pub mod client;
pub mod format;
pub mod interactive;
pub mod logging;

pub use client::{GatewayError, RequestGateway, ResultItem};
pub use format::format_result_item;
pub use interactive::InteractiveSearch;

/// Configuration shared by the one-shot and interactive surfaces.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    pub page_size: usize,
    pub timeout_secs: u64,
    pub verbose: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8000".to_string(),
            page_size: interactive::constants::RESULTS_PER_PAGE,
            timeout_secs: 10,
            verbose: false,
        }
    }
}
