//! Stable DTOs and IDs used across the gavfind workspace.
//!
//! This crate is intentionally boring:
//! - the input record read from hash/report CSV files
//! - canonical artifact coordinates (GAV)
//! - stable string IDs for CSV headers, markers, and provenance tags

#![forbid(unsafe_code)]

pub mod ids;
pub mod record;

pub use record::{ArtifactIdentity, FoundMarker, HashRecord};
