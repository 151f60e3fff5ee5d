//! Client for the artifact search service (Maven Central's Solr endpoint by default).
//!
//! Three layers, each usable on its own:
//! - [`query`]: builds the Lucene-style `q` expression and the request URL
//! - [`parse`]: normalizes a JSON response body into an [`ArtifactIdentity`] or nothing
//! - [`client`]: the blocking HTTP transport and the [`ArtifactSearch`] seam
//!
//! Nothing here retries; retry policy belongs to the resolver.
//!
//! [`ArtifactIdentity`]: gavfind_types::ArtifactIdentity

#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod parse;
pub mod query;

pub use client::{
    ArtifactSearch, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, HttpSearchClient, RawResponse,
};
pub use error::SearchError;
pub use parse::{SearchDoc, parse_search_response, select_oldest};
pub use query::{CoordinateQuery, query_expression, sha1_expression};

/// Default base URL of the search service.
pub const DEFAULT_SEARCH_URL: &str = "https://search.maven.org";
