use crate::client::{GatewayError, ResultItem};

// Request/response pairs for the three fetch worker channels. Each response
// carries back the identity of the request that produced it so the event
// loop can discard anything the UI has already moved past.

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub id: u64,
    pub query: String,
    pub offset: usize,
    pub reset: bool,
}

#[derive(Debug)]
pub struct PageResponse {
    pub id: u64,
    pub reset: bool,
    pub outcome: Result<Vec<ResultItem>, GatewayError>,
}

#[derive(Debug, Clone)]
pub struct SuggestRequest {
    pub seq: u64,
    pub token: String,
}

#[derive(Debug)]
pub struct SuggestResponse {
    pub seq: u64,
    pub outcome: Result<Vec<String>, GatewayError>,
}

#[derive(Debug, Clone)]
pub struct PreviewRequest {
    /// Index of the result the preview was requested for.
    pub index: usize,
    pub row_key: String,
}

#[derive(Debug)]
pub struct PreviewResponse {
    pub index: usize,
    pub row_key: String,
    /// Readable text extracted from the cached page on success.
    pub outcome: Result<String, GatewayError>,
}
