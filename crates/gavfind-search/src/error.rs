use thiserror::Error;

/// Failures of a single search request.
///
/// Only [`SearchError::Network`] is transient. A malformed response body is not an
/// error at all: it parses to "not found".
#[derive(Debug, Error)]
pub enum SearchError {
    /// Anything that went wrong after the request was formed: connection refused or
    /// reset, a connect/read timeout, or a body cut short.
    #[error("network error talking to {url}: {message}")]
    Network { url: String, message: String },

    /// HTTP 401. Carries the credentials that were attempted.
    #[error("invalid credentials {username}, {password}")]
    InvalidCredentials { username: String, password: String },

    /// HTTP 400, with the response body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The client could not be built or the request could not be formed.
    #[error("search client error: {0}")]
    Client(String),
}

impl SearchError {
    /// Whether re-issuing the identical request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SearchError::Network { .. })
    }
}
