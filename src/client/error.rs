/// Error taxonomy for world server requests.
///
/// Both variants are non-fatal: the caller logs them and keeps the last displayed state.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or non-success status.
    #[error("network error on {endpoint}: {reason}")]
    Network { endpoint: &'static str, reason: String },
    /// The body was not a valid world payload.
    #[error("parse error on {endpoint}: {reason}")]
    Parse { endpoint: &'static str, reason: String },
}

impl ClientError {
    pub fn network(endpoint: &'static str, reason: impl ToString) -> Self {
        ClientError::Network { endpoint, reason: reason.to_string() }
    }

    pub fn parse(endpoint: &'static str, reason: impl ToString) -> Self {
        ClientError::Parse { endpoint, reason: reason.to_string() }
    }
}
