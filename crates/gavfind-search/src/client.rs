use crate::SearchError;
use crate::parse::parse_search_response;
use crate::query::{CoordinateQuery, search_url, sha1_expression};
use gavfind_types::ArtifactIdentity;
use reqwest::{StatusCode, Url};
use std::time::Duration;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(3150);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(27);

/// Status and body of one search request, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Normalize the body; see [`parse_search_response`].
    pub fn identity(&self) -> Option<ArtifactIdentity> {
        parse_search_response(&self.body)
    }
}

/// A source of search results.
///
/// Each call issues exactly one request; implementations keep no state between calls
/// that affects results.
pub trait ArtifactSearch {
    /// Look up artifacts whose content hash is `sha1`.
    fn search_by_sha1(&self, sha1: &str) -> Result<RawResponse, SearchError>;

    /// Look up an artifact by its coordinates and packaging.
    fn search_by_coordinates(&self, query: &CoordinateQuery)
    -> Result<RawResponse, SearchError>;
}

/// Blocking HTTP implementation of [`ArtifactSearch`].
#[derive(Clone, Debug)]
pub struct HttpSearchClient {
    base_url: Url,
    username: Option<String>,
    password: Option<String>,
    http: reqwest::blocking::Client,
}

impl HttpSearchClient {
    /// Create an unauthenticated client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Client`] when the URL does not parse or the HTTP client
    /// cannot be initialized.
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| SearchError::Client(format!("invalid base url {base_url}: {err}")))?;

        Ok(Self {
            base_url,
            username: None,
            password: None,
            http: build_http(DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)?,
        })
    }

    /// Replace the connect and whole-request timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Client`] when the HTTP client cannot be rebuilt.
    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Result<Self, SearchError> {
        self.http = build_http(connect, request)?;
        Ok(self)
    }

    /// Send HTTP basic credentials with every request (for authenticated mirrors).
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get(&self, expression: &str) -> Result<RawResponse, SearchError> {
        let url = search_url(&self.base_url, expression)?;
        tracing::debug!(%url, "search request");

        let mut request = self.http.get(url.clone());
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }

        let response = request.send().map_err(|err| network_error(&url, err))?;
        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            let body = response.text().unwrap_or_default();
            return Err(SearchError::BadRequest(body));
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(SearchError::InvalidCredentials {
                username: self.username.clone().unwrap_or_default(),
                password: self.password.clone().unwrap_or_default(),
            });
        }

        let body = response.text().map_err(|err| network_error(&url, err))?;
        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

impl ArtifactSearch for HttpSearchClient {
    fn search_by_sha1(&self, sha1: &str) -> Result<RawResponse, SearchError> {
        self.get(&sha1_expression(sha1))
    }

    fn search_by_coordinates(
        &self,
        query: &CoordinateQuery,
    ) -> Result<RawResponse, SearchError> {
        self.get(&query.expression())
    }
}

fn build_http(connect: Duration, request: Duration) -> Result<reqwest::blocking::Client, SearchError> {
    reqwest::blocking::Client::builder()
        .connect_timeout(connect)
        .timeout(request)
        .build()
        .map_err(|err| SearchError::Client(err.to_string()))
}

/// Any failure once the request is formed: sending, waiting, or reading the body.
fn network_error(url: &Url, err: reqwest::Error) -> SearchError {
    tracing::error!(%url, "failed to reach search service: {err}");
    SearchError::Network {
        url: url.to_string(),
        message: err.to_string(),
    }
}
