//! Filesystem adapters: discover library files, hash them, and read/write hash CSVs.
//!
//! This crate is allowed to do filesystem IO. It never talks to the network.

#![forbid(unsafe_code)]

mod discover;
mod hash;
mod input;

pub use discover::discover_libraries;
pub use hash::{hash_libraries, render_hash_csv, sha1_file, write_hash_csv};
pub use input::{parse_hash_records, read_hash_records};

/// Default globs selecting library files under a scan directory.
pub const DEFAULT_INCLUDE: &[&str] = &["**/*.jar"];
