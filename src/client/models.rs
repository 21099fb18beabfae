use serde::{Deserialize, Serialize};

/// One search hit as returned by the backend.
///
/// `row_key` is an opaque backend identifier; the client only passes it back
/// verbatim when requesting the cached preview of this result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub hostname: String,
    pub url: String,
    pub title: String,
    pub snippet: String,
    #[serde(rename = "rowKey")]
    pub row_key: String,
}

/// Body of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponseBody {
    pub results: Vec<ResultItem>,
}

/// Body of `GET /preview`: a full HTML document rendered from the page cache.
#[derive(Debug, Deserialize)]
pub struct PreviewBody {
    pub page: String,
}
