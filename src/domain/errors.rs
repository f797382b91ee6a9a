use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure talking to a third-party HTTP API (LMS, weather, news, LLM)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    /// The upstream answered with a non-2xx status
    #[error("Upstream returned {status} {status_text}: {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Transport(String),
    /// The body could not be decoded into the expected shape
    #[error("Malformed upstream payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            UpstreamError::Malformed(err.to_string())
        } else if err.is_timeout() {
            UpstreamError::Transport(format!("Request timed out: {}", err))
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

/// Fatal outcomes of the assignment aggregation pipeline.
///
/// Per-course failures never show up here; they are absorbed by the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregationError {
    #[error("LMS credentials are not configured")]
    NotConfigured,
    #[error("Failed to fetch course catalog: {0}")]
    Catalog(UpstreamError),
}
