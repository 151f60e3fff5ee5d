//! Response normalization.
//!
//! Fails soft: anything that is not a well-formed, non-empty result envelope parses
//! to `None`, never to an error.

use gavfind_types::ArtifactIdentity;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    response: Option<ResultBody>,
}

#[derive(Debug, Default, Deserialize)]
struct ResultBody {
    #[serde(default, rename = "numFound")]
    num_found: Option<Value>,
    #[serde(default)]
    docs: Option<Vec<SearchDoc>>,
}

/// One matching document. Only the fields the resolver uses are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchDoc {
    #[serde(default)]
    pub g: Option<String>,
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub v: Option<String>,
    /// Unusable values (strings that are not numbers, objects) read as no timestamp.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<i64>,
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}

fn parse_timestamp(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl SearchDoc {
    fn identity(&self) -> Option<ArtifactIdentity> {
        ArtifactIdentity::complete(
            self.g.as_deref().unwrap_or_default(),
            self.a.as_deref().unwrap_or_default(),
            self.v.as_deref().unwrap_or_default(),
        )
    }
}

/// Pick the earliest-published document: smallest `timestamp`, first one on ties.
///
/// Documents without a timestamp sort after every timestamped one.
pub fn select_oldest(docs: &[SearchDoc]) -> Option<&SearchDoc> {
    // `min_by_key` returns the first of several equal minima.
    docs.iter()
        .min_by_key(|doc| doc.timestamp.map_or((1, 0), |ts| (0, ts)))
}

/// Parse a search response body into the identity of the matching artifact.
pub fn parse_search_response(body: &str) -> Option<ArtifactIdentity> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::debug!("search response is not a result envelope: {err}");
            return None;
        }
    };

    let result = envelope.response?;
    let num_found = result.num_found.as_ref().and_then(parse_count)?;
    if num_found == 0 {
        return None;
    }
    let docs = result.docs?;

    if docs.len() > 1 {
        tracing::warn!(
            matches = docs.len(),
            "multiple artifacts found, choosing the oldest artifact"
        );
    }

    let doc = select_oldest(&docs)?;
    let identity = doc.identity();
    if identity.is_none() {
        tracing::warn!(?doc, "matching document has incomplete coordinates");
    }
    identity
}

fn parse_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
