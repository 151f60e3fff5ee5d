use gavfind_types::{ArtifactIdentity, HashRecord};
use std::collections::BTreeSet;

/// Terminal state of one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Found {
        identity: ArtifactIdentity,
        found_with: String,
    },
    /// The retry budget ran out; `cause` is the last network error.
    Exception { cause: String },
    /// The service answered but knows no artifact with this hash.
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub record: HashRecord,
    pub identity: ArtifactIdentity,
    pub found_with: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionRecord {
    pub record: HashRecord,
    pub cause: String,
}

/// Distinct artifacts in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSet {
    order: Vec<ArtifactIdentity>,
    seen: BTreeSet<ArtifactIdentity>,
}

impl ResolvedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless an identity with the same coordinates is already present.
    pub fn insert(&mut self, identity: ArtifactIdentity) -> bool {
        if self.seen.contains(&identity) {
            return false;
        }
        self.seen.insert(identity.clone());
        self.order.push(identity);
        true
    }

    pub fn contains(&self, identity: &ArtifactIdentity) -> bool {
        self.seen.contains(identity)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactIdentity> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[ArtifactIdentity] {
        &self.order
    }
}

impl FromIterator<ArtifactIdentity> for ResolvedSet {
    fn from_iter<T: IntoIterator<Item = ArtifactIdentity>>(iter: T) -> Self {
        let mut set = ResolvedSet::new();
        for identity in iter {
            set.insert(identity);
        }
        set
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolutionCounts {
    pub records: usize,
    pub found: usize,
    pub exceptions: usize,
    pub unknown: usize,
    pub artifacts: usize,
    pub attempts: u32,
}

/// Bucketed result of a run. Every input record lands in exactly one bucket,
/// and each bucket keeps input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub found: Vec<ResolvedRecord>,
    pub exceptions: Vec<ExceptionRecord>,
    pub unknown: Vec<HashRecord>,
    pub artifacts: ResolvedSet,
    /// Network requests issued, retries included.
    pub attempts: u32,
}

impl Resolution {
    /// Route one record into its bucket.
    pub fn record(&mut self, record: HashRecord, outcome: ResolutionOutcome) {
        match outcome {
            ResolutionOutcome::Found {
                identity,
                found_with,
            } => {
                self.artifacts.insert(identity.clone());
                self.found.push(ResolvedRecord {
                    record,
                    identity,
                    found_with,
                });
            }
            ResolutionOutcome::Exception { cause } => {
                self.exceptions.push(ExceptionRecord { record, cause });
            }
            ResolutionOutcome::Unknown => self.unknown.push(record),
        }
    }

    pub fn counts(&self) -> ResolutionCounts {
        ResolutionCounts {
            records: self.found.len() + self.exceptions.len() + self.unknown.len(),
            found: self.found.len(),
            exceptions: self.exceptions.len(),
            unknown: self.unknown.len(),
            artifacts: self.artifacts.len(),
            attempts: self.attempts,
        }
    }
}
