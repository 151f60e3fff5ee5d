//! Hash-to-coordinates resolution (no IO of its own).
//!
//! Input: hash records read elsewhere, plus an [`ArtifactSearch`] to query.
//! Output: one outcome per record, bucketed, plus the deduplicated artifact set.
//!
//! [`ArtifactSearch`]: gavfind_search::ArtifactSearch

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;

mod resolver;

pub use policy::RetryPolicy;
pub use report::{
    ExceptionRecord, Resolution, ResolutionCounts, ResolutionOutcome, ResolvedRecord,
    ResolvedSet,
};
pub use resolver::{Resolver, resolved_set_from_records};

#[cfg(test)]
mod proptest;
