//! Fuzz target for hash/report CSV parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_hash_csv
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct CsvInput {
    hash_name: String,
    text: String,
}

fuzz_target!(|input: CsvInput| {
    if input.text.len() > 64 * 1024 {
        return;
    }
    let _ = gavfind_repo::parse_hash_records(&input.text, &input.hash_name);
});
