use crate::ids;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state `Found` column of a report row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoundMarker {
    /// `Y`: resolved to coordinates.
    Found,
    /// `Exception`: lookup gave up after exhausting the network retry budget.
    Exception,
    /// `N`: the search service has no artifact for the hash.
    NotFound,
}

impl FoundMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            FoundMarker::Found => ids::MARKER_FOUND,
            FoundMarker::Exception => ids::MARKER_EXCEPTION,
            FoundMarker::NotFound => ids::MARKER_NOT_FOUND,
        }
    }

    /// Parse a `Found` cell. Anything other than the three literal markers is `None`.
    pub fn parse(cell: &str) -> Option<Self> {
        match cell {
            ids::MARKER_FOUND => Some(FoundMarker::Found),
            ids::MARKER_EXCEPTION => Some(FoundMarker::Exception),
            ids::MARKER_NOT_FOUND => Some(FoundMarker::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for FoundMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical Maven coordinates of a published artifact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtifactIdentity {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ArtifactIdentity {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Build an identity only when all three coordinates are non-empty.
    pub fn complete(group_id: &str, artifact_id: &str, version: &str) -> Option<Self> {
        if group_id.is_empty() || artifact_id.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self::new(group_id, artifact_id, version))
    }
}

impl fmt::Display for ArtifactIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One row of a hash or report CSV: a scanned file and its content hash.
///
/// Rows read from an earlier report also carry the previous outcome, which lets a
/// re-run skip hashes that were already resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRecord {
    pub filename: String,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<FoundMarker>,
    #[serde(default)]
    pub found_with: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub version: String,
}

impl HashRecord {
    pub fn new(filename: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            hash: hash.into(),
            ..Self::default()
        }
    }

    /// Coordinates recorded by an earlier run, if this row is marked `Y` and complete.
    pub fn prior_identity(&self) -> Option<ArtifactIdentity> {
        if self.found != Some(FoundMarker::Found) {
            return None;
        }
        ArtifactIdentity::complete(&self.group_id, &self.artifact_id, &self.version)
    }
}
