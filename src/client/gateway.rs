use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::client::error::GatewayError;
use crate::client::models::{PreviewBody, ResultItem, SearchResponseBody};

/// Header carrying the zero-based result offset for a search page.
pub const PAGE_HEADER: &str = "X-Page-Number";

/// Thin blocking wrapper over the three backend query endpoints.
///
/// The gateway does no throttling or retrying of its own; callers decide
/// when a request is worth issuing and how failures surface to the user.
#[derive(Debug)]
pub struct RequestGateway {
    http: Client,
    base: Url,
}

impl RequestGateway {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base = Url::parse(endpoint)
            .map_err(|e| GatewayError::Validation(format!("invalid endpoint {endpoint}: {e}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Network)?;
        Ok(Self { http, base })
    }

    /// `GET /search?q=<query>` with the offset in the page header.
    pub fn search(&self, query: &str, offset: usize) -> Result<Vec<ResultItem>, GatewayError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GatewayError::Validation(
                "search query must not be empty".to_string(),
            ));
        }

        let url = self.endpoint_url("search")?;
        tracing::debug!(query, offset, "fetching search page");
        let response = self
            .http
            .get(url)
            .query(&[("q", query)])
            .header(PAGE_HEADER, offset.to_string())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(GatewayError::Network)?;

        let body: SearchResponseBody = response.json().map_err(GatewayError::Decode)?;
        tracing::debug!(count = body.results.len(), "search page received");
        Ok(body.results)
    }

    /// `GET /autocomplete?p=<token>` returning suggestion candidates for one token.
    pub fn autocomplete(&self, token: &str) -> Result<Vec<String>, GatewayError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(GatewayError::Validation(
                "autocomplete token must not be empty".to_string(),
            ));
        }

        let url = self.endpoint_url("autocomplete")?;
        let response = self
            .http
            .get(url)
            .query(&[("p", token)])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(GatewayError::Network)?;

        response.json().map_err(GatewayError::Decode)
    }

    /// `GET /preview?r=<rowKey>` returning the cached HTML rendering of a result.
    pub fn preview(&self, row_key: &str) -> Result<String, GatewayError> {
        if row_key.is_empty() {
            return Err(GatewayError::Validation(
                "preview row key must not be empty".to_string(),
            ));
        }

        let url = self.endpoint_url("preview")?;
        tracing::debug!(row_key, "fetching preview");
        let response = self
            .http
            .get(url)
            .query(&[("r", row_key)])
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(GatewayError::Network)?;

        let body: PreviewBody = response.json().map_err(GatewayError::Decode)?;
        Ok(body.page)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, GatewayError> {
        self.base
            .join(path)
            .map_err(|e| GatewayError::Validation(format!("invalid endpoint path {path}: {e}")))
    }
}
