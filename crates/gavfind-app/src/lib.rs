//! Use case orchestration for gavfind.
//!
//! This crate provides the application layer: use cases that coordinate the settings, repo,
//! search, domain, and render layers. It owns no business rules of its own.
//!
//! The CLI crate depends on this; it only handles argument parsing, client construction, and
//! exit codes.

#![forbid(unsafe_code)]

mod config;
mod lookup;
mod manifests;
mod search;
mod write;

pub use config::load_config;
pub use lookup::{LookupInput, LookupQuery, run_lookup};
pub use manifests::{ManifestPaths, ManifestsInput, ManifestsOutput, run_manifests, write_manifests};
pub use search::{SearchInput, SearchOutput, report_rows, run_search};
pub use write::write_text;
