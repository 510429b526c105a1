use thiserror::Error;

/// Every way a listing or lookup can fail. The controller collapses all of
/// them into an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network failure for {url}: {message}")]
    NetworkFailure {
        url: String,
        status: Option<u16>,
        message: String,
    },
    #[error("no creature found at {url}")]
    NotFound { url: String },
    #[error("malformed response from {url}: {message}")]
    MalformedResponse { url: String, message: String },
}

impl FetchError {
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkFailure {
            url: url.into(),
            status: None,
            message: message.into(),
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::NetworkFailure {
            url: url.into(),
            status: Some(status),
            message: format!("unexpected http status {status}"),
        }
    }

    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    pub fn malformed(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Short label used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkFailure { .. } => "network_failure",
            Self::NotFound { .. } => "not_found",
            Self::MalformedResponse { .. } => "malformed_response",
        }
    }
}
