//! Property-based tests for the resolver.
//!
//! These tests use proptest to verify invariants around:
//! - the retry budget (attempt counts and terminal state)
//! - bucketing (every record lands in exactly one bucket, in input order)
//! - deduplication of resolved coordinates

use crate::policy::RetryPolicy;
use crate::resolver::Resolver;
use gavfind_test_util::{Reply, ScriptedSearch, found_body};
use gavfind_types::{FoundMarker, HashRecord};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// What the scripted service does for one hash.
#[derive(Clone, Debug)]
enum Behavior {
    Found(u8),
    NotFound,
    AlwaysFails,
    PreResolved(u8),
}

fn arb_behavior() -> impl Strategy<Value = Behavior> {
    prop_oneof![
        (0u8..4).prop_map(Behavior::Found),
        Just(Behavior::NotFound),
        Just(Behavior::AlwaysFails),
        (0u8..4).prop_map(Behavior::PreResolved),
    ]
}

fn build(behaviors: &[Behavior]) -> (ScriptedSearch, Vec<HashRecord>) {
    let mut search = ScriptedSearch::new();
    let mut records = Vec::new();
    for (i, behavior) in behaviors.iter().enumerate() {
        let hash = format!("h{i}");
        let mut record = HashRecord::new(format!("f{i}.jar"), hash.clone());
        match behavior {
            Behavior::Found(v) => {
                search = search.found(&hash, "g", "a", &v.to_string());
            }
            Behavior::NotFound => {}
            Behavior::AlwaysFails => {
                search = search.script(&hash, [Reply::NetworkError]);
            }
            Behavior::PreResolved(v) => {
                record.found = Some(FoundMarker::Found);
                record.group_id = "g".to_string();
                record.artifact_id = "a".to_string();
                record.version = v.to_string();
            }
        }
        records.push(record);
    }
    (search, records)
}

proptest! {
    #[test]
    fn attempts_follow_retry_budget(retries in 0u32..5, failures in 0usize..8) {
        let mut replies = vec![Reply::NetworkError; failures];
        replies.push(Reply::Body(found_body("g", "a", "1")));
        let search = ScriptedSearch::new().script("h", replies);
        let resolver = Resolver::new(&search, RetryPolicy::new(retries));

        let resolution = resolver
            .resolve_all(&[HashRecord::new("a.jar", "h")])
            .expect("network errors never escape");

        if failures <= retries as usize {
            prop_assert_eq!(resolution.found.len(), 1);
            prop_assert_eq!(search.call_count(), failures + 1);
        } else {
            prop_assert_eq!(resolution.exceptions.len(), 1);
            prop_assert_eq!(search.call_count(), retries as usize + 1);
        }
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket(
        behaviors in prop::collection::vec(arb_behavior(), 0..16)
    ) {
        let (search, records) = build(&behaviors);
        let resolver = Resolver::new(&search, RetryPolicy::new(1));
        let resolution = resolver.resolve_all(&records).expect("resolve");

        let counts = resolution.counts();
        prop_assert_eq!(counts.records, records.len());

        let mut seen: Vec<&str> = resolution
            .found
            .iter()
            .map(|r| r.record.hash.as_str())
            .chain(resolution.exceptions.iter().map(|r| r.record.hash.as_str()))
            .chain(resolution.unknown.iter().map(|r| r.hash.as_str()))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = records.iter().map(|r| r.hash.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);

        // Buckets preserve input order.
        let found_order: Vec<usize> = resolution
            .found
            .iter()
            .map(|r| r.record.hash[1..].parse().expect("index"))
            .collect();
        prop_assert!(found_order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn resolved_set_has_unique_coordinates(
        behaviors in prop::collection::vec(arb_behavior(), 0..16)
    ) {
        let (search, records) = build(&behaviors);
        let resolver = Resolver::new(&search, RetryPolicy::new(0));
        let resolution = resolver.resolve_all(&records).expect("resolve");

        let unique: BTreeSet<_> = resolution.found.iter().map(|r| r.identity.clone()).collect();
        prop_assert_eq!(resolution.artifacts.len(), unique.len());
        for identity in &unique {
            prop_assert!(resolution.artifacts.contains(identity));
        }
    }
}
