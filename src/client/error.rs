use thiserror::Error;

/// Failure kinds surfaced by the request gateway.
///
/// `Validation` never issues a request; `Network` covers transport failures
/// and non-success statuses; `Decode` covers malformed response bodies. None
/// of these are fatal: callers roll back to their pre-request state and the
/// same action can be retried by the user.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl GatewayError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}
