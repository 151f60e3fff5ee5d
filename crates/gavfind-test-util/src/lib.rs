//! Shared test utilities for the gavfind workspace.
//!
//! [`ScriptedSearch`] stands in for the HTTP client: each hash gets a script of
//! replies that are consumed one per request, and every request is counted so
//! tests can assert on retry behavior.

use gavfind_search::{ArtifactSearch, CoordinateQuery, RawResponse, SearchError};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

/// One scripted reply.
#[derive(Clone, Debug)]
pub enum Reply {
    Body(String),
    NetworkError,
    BadRequest,
    Unauthorized,
}

impl Reply {
    fn into_result(self, key: &str) -> Result<RawResponse, SearchError> {
        match self {
            Reply::Body(body) => Ok(RawResponse::ok(body)),
            Reply::NetworkError => Err(SearchError::Network {
                url: format!("scripted://{key}"),
                message: "read timed out".to_string(),
            }),
            Reply::BadRequest => Err(SearchError::BadRequest("scripted bad request".to_string())),
            Reply::Unauthorized => Err(SearchError::InvalidCredentials {
                username: String::new(),
                password: String::new(),
            }),
        }
    }
}

/// Scripted [`ArtifactSearch`] keyed by SHA-1 (or by coordinate expression).
///
/// When a key's script runs out, the last reply repeats; unknown keys answer
/// with an empty result.
#[derive(Debug, Default)]
pub struct ScriptedSearch {
    scripts: RefCell<BTreeMap<String, VecDeque<Reply>>>,
    last: RefCell<BTreeMap<String, Reply>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append replies to the script for `key`.
    pub fn script(self, key: &str, replies: impl IntoIterator<Item = Reply>) -> Self {
        self.scripts
            .borrow_mut()
            .entry(key.to_string())
            .or_default()
            .extend(replies);
        self
    }

    /// Always answer `key` with a single matching document.
    pub fn found(self, key: &str, g: &str, a: &str, v: &str) -> Self {
        self.script(key, [Reply::Body(found_body(g, a, v))])
    }

    /// Total requests issued.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Requests issued for one key.
    pub fn calls_for(&self, key: &str) -> usize {
        self.calls.borrow().iter().filter(|k| *k == key).count()
    }

    fn answer(&self, key: &str) -> Result<RawResponse, SearchError> {
        self.calls.borrow_mut().push(key.to_string());

        let next = self
            .scripts
            .borrow_mut()
            .get_mut(key)
            .and_then(VecDeque::pop_front);
        let reply = match next {
            Some(reply) => {
                self.last
                    .borrow_mut()
                    .insert(key.to_string(), reply.clone());
                reply
            }
            None => self
                .last
                .borrow()
                .get(key)
                .cloned()
                .unwrap_or_else(|| Reply::Body(not_found_body())),
        };
        reply.into_result(key)
    }
}

impl ArtifactSearch for ScriptedSearch {
    fn search_by_sha1(&self, sha1: &str) -> Result<RawResponse, SearchError> {
        self.answer(sha1)
    }

    fn search_by_coordinates(
        &self,
        query: &CoordinateQuery,
    ) -> Result<RawResponse, SearchError> {
        self.answer(&query.expression())
    }
}

/// A search document as the service returns it.
pub fn doc(g: &str, a: &str, v: &str, timestamp: i64) -> Value {
    json!({ "g": g, "a": a, "v": v, "timestamp": timestamp })
}

/// A response body wrapping `docs`, with `numFound` set to their count.
pub fn docs_body(docs: Vec<Value>) -> String {
    json!({ "response": { "numFound": docs.len(), "docs": docs } }).to_string()
}

pub fn found_body(g: &str, a: &str, v: &str) -> String {
    docs_body(vec![doc(g, a, v, 1)])
}

pub fn not_found_body() -> String {
    docs_body(Vec::new())
}
