//! Fuzz target for query construction.
//!
//! Coordinates come from user input and earlier reports, so any string must produce a
//! request URL whose `q` parameter decodes back to the expression.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_search_query
//! ```

#![no_main]

use arbitrary::Arbitrary;
use gavfind_search::{CoordinateQuery, HttpSearchClient};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Arbitrary, Debug)]
struct QueryInput {
    group_id: String,
    artifact_id: String,
    version: String,
    packaging: String,
}

fn client() -> Option<&'static HttpSearchClient> {
    static CLIENT: OnceLock<Option<HttpSearchClient>> = OnceLock::new();
    CLIENT
        .get_or_init(|| HttpSearchClient::new("https://search.maven.org/").ok())
        .as_ref()
}

fuzz_target!(|input: QueryInput| {
    let Some(client) = client() else {
        return;
    };
    let query = CoordinateQuery::jar(input.group_id, input.artifact_id, input.version)
        .with_packaging(input.packaging);
    let expression = query.expression();

    let url = gavfind_search::query::search_url(client.base_url(), &expression)
        .expect("joining the fixed endpoint never fails");
    let q = url
        .query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned());
    assert_eq!(q.as_deref(), Some(expression.as_str()));
});
