//! Stable identifiers shared by the CSV reader, the report writer, and the resolver.
//!
//! The report doubles as an input for later runs, so these strings are part of the
//! external contract.

// CSV headers
pub const HEADER_FILE_NAME: &str = "File Name";
pub const HEADER_FOUND: &str = "Found";
pub const HEADER_FOUND_WITH: &str = "Found With";
pub const HEADER_GROUP_ID: &str = "Group Id";
pub const HEADER_ARTIFACT_ID: &str = "Artifact Id";
pub const HEADER_VERSION: &str = "Version";

/// Default header of the hash column.
pub const DEFAULT_HASH_NAME: &str = "sha1";

// Found markers
pub const MARKER_FOUND: &str = "Y";
pub const MARKER_EXCEPTION: &str = "Exception";
pub const MARKER_NOT_FOUND: &str = "N";

// Provenance tags
pub const FOUND_WITH_ONLINE: &str = "online";
