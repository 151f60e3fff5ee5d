//! The `lookup` use case: a single search, no retries, no files written.

use anyhow::Context;
use gavfind_search::{ArtifactSearch, CoordinateQuery};
use gavfind_types::ArtifactIdentity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupQuery {
    Sha1(String),
    Coordinates(CoordinateQuery),
}

#[derive(Clone, Copy)]
pub struct LookupInput<'a> {
    pub search: &'a dyn ArtifactSearch,
    pub query: &'a LookupQuery,
}

/// Returns `None` when the service knows no matching artifact.
pub fn run_lookup(input: LookupInput<'_>) -> anyhow::Result<Option<ArtifactIdentity>> {
    let response = match input.query {
        LookupQuery::Sha1(sha1) => input
            .search
            .search_by_sha1(sha1)
            .with_context(|| format!("search sha1 {sha1}"))?,
        LookupQuery::Coordinates(query) => input
            .search
            .search_by_coordinates(query)
            .with_context(|| format!("search {}", query.expression()))?,
    };

    let identity = response.identity();
    match &identity {
        Some(identity) => tracing::info!(%identity, "artifact found"),
        None => tracing::warn!(status = response.status, "artifact not found"),
    }
    Ok(identity)
}
