//! Fuzz target for `gavfind.toml` parsing and resolution.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = gavfind_settings::parse_config_toml(text) {
            if let Ok(resolved) = gavfind_settings::resolve_config(cfg, Default::default()) {
                assert!(resolved.url.ends_with('/'));
            }
        }
    }
});
