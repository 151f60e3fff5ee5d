use crate::policy::RetryPolicy;
use crate::report::{Resolution, ResolutionOutcome, ResolvedSet};
use gavfind_search::{ArtifactSearch, SearchError};
use gavfind_types::{FoundMarker, HashRecord, ids};

/// Resolves hash records to artifact coordinates, one record at a time.
///
/// Each record ends in exactly one of three states:
/// - `Found`: taken from an earlier report, or matched online
/// - `Exception`: every attempt failed with a network error
/// - `Unknown`: the service answered without a usable match
///
/// HTTP 400/401 are not retried and abort the run.
pub struct Resolver<'a> {
    search: &'a dyn ArtifactSearch,
    policy: RetryPolicy,
}

impl<'a> Resolver<'a> {
    pub fn new(search: &'a dyn ArtifactSearch, policy: RetryPolicy) -> Self {
        Self { search, policy }
    }

    /// Resolve every record in input order.
    ///
    /// # Errors
    ///
    /// Returns the first non-retryable [`SearchError`].
    pub fn resolve_all(&self, records: &[HashRecord]) -> Result<Resolution, SearchError> {
        let mut resolution = Resolution::default();
        for record in records {
            let (outcome, attempts) = self.resolve_counted(record)?;
            resolution.attempts += attempts;
            resolution.record(record.clone(), outcome);
        }
        Ok(resolution)
    }

    /// Resolve a single record.
    ///
    /// # Errors
    ///
    /// Returns a non-retryable [`SearchError`] unchanged.
    pub fn resolve_one(&self, record: &HashRecord) -> Result<ResolutionOutcome, SearchError> {
        self.resolve_counted(record).map(|(outcome, _)| outcome)
    }

    fn resolve_counted(
        &self,
        record: &HashRecord,
    ) -> Result<(ResolutionOutcome, u32), SearchError> {
        if let Some(identity) = record.prior_identity() {
            tracing::debug!(hash = %record.hash, %identity, "already resolved");
            return Ok((
                ResolutionOutcome::Found {
                    identity,
                    found_with: record.found_with.clone(),
                },
                0,
            ));
        }
        if record.found == Some(FoundMarker::Found) {
            tracing::warn!(
                file = %record.filename,
                "row marked found without complete coordinates; searching again"
            );
        }
        self.search_online(&record.hash)
    }

    fn search_online(&self, hash: &str) -> Result<(ResolutionOutcome, u32), SearchError> {
        tracing::info!(%hash, "search online");

        let max_attempts = self.policy.max_attempts();
        let mut last_error = None;

        for attempt in 1..=max_attempts {
            match self.search.search_by_sha1(hash) {
                Ok(response) => {
                    let outcome = match response.identity() {
                        Some(identity) => {
                            tracing::info!(%hash, %identity, "hash found online");
                            ResolutionOutcome::Found {
                                identity,
                                found_with: ids::FOUND_WITH_ONLINE.to_string(),
                            }
                        }
                        None => {
                            tracing::warn!(%hash, "artifact not found online");
                            ResolutionOutcome::Unknown
                        }
                    };
                    return Ok((outcome, attempt));
                }
                Err(err) if err.is_retryable() => {
                    tracing::warn!(%hash, attempt, max_attempts, "search failed: {err}");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        let cause = last_error.map(|err| err.to_string()).unwrap_or_default();
        tracing::error!(
            %hash,
            retries = self.policy.retries,
            "giving up on hash: {cause}"
        );
        Ok((ResolutionOutcome::Exception { cause }, max_attempts))
    }
}

/// Artifacts recorded as found by an earlier run, without touching the network.
pub fn resolved_set_from_records(records: &[HashRecord]) -> ResolvedSet {
    records.iter().filter_map(HashRecord::prior_identity).collect()
}
