//! Fuzz target for search response normalization.
//!
//! Goal: any body the service (or a proxy in front of it) returns must map to an identity
//! or `None`, never a panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_search_response
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        if let Some(identity) = gavfind_search::parse_search_response(body) {
            assert!(!identity.group_id.is_empty());
            assert!(!identity.artifact_id.is_empty());
            assert!(!identity.version.is_empty());
        }
    }
});
