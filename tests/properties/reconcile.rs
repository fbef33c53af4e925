//! Property tests for the reconciliation engine.

use std::collections::HashSet;

use proptest::prelude::*;

use xdetex::domain::entities::{AcceptedFile, OfferedFile};
use xdetex::domain::services::reconcile;
use xdetex::domain::value_objects::RequiredManifest;

const POOL: &[&str] = &[
    "time_spent_on_facebook.json",
    "your_comment_active_days.json",
    "facebook_reels_usage_information.json",
    "your_notifications_tab_activity.json",
    "your_facebook_watch_activity_in_the_last_28_days.json",
    "profile_information.json",
    "inbox.json",
    "ads_interests.json",
];

/// A name drawn mostly from the manifest, sometimes not
fn file_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(POOL).prop_map(str::to_string),
        1 => proptest::string::string_regex("[a-z_]{1,12}\\.json").unwrap(),
    ]
}

fn batch() -> impl Strategy<Value = Vec<(String, u8)>> {
    proptest::collection::vec((file_name(), any::<u8>()), 0..8)
}

fn offered(batch: &[(String, u8)]) -> Vec<OfferedFile> {
    batch
        .iter()
        .map(|(name, tag)| OfferedFile::json(name.clone(), vec![*tag]))
        .collect()
}

fn run(manifest: &RequiredManifest, batches: &[Vec<(String, u8)>]) -> Vec<AcceptedFile> {
    let mut accepted = Vec::new();
    for b in batches {
        accepted = reconcile(manifest, &accepted, offered(b)).merged;
    }
    accepted
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merged never holds two files with the same name.
    #[test]
    fn property_merged_names_are_unique(
        batches in proptest::collection::vec(batch(), 0..6)
    ) {
        let manifest = RequiredManifest::facebook_export();
        let merged = run(&manifest, &batches);

        let mut seen = HashSet::new();
        for file in &merged {
            prop_assert!(seen.insert(file.name().to_string()), "duplicate {}", file.name());
        }
    }

    /// PROPERTY: the first offered payload for a name is the one kept.
    #[test]
    fn property_first_seen_wins(
        batches in proptest::collection::vec(batch(), 1..6)
    ) {
        let manifest = RequiredManifest::facebook_export();
        let merged = run(&manifest, &batches);

        for file in &merged {
            let first = batches
                .iter()
                .flatten()
                .find(|(name, _)| name == file.name())
                .map(|(_, tag)| *tag);
            prop_assert_eq!(Some(file.payload()[0]), first);
        }
    }

    /// PROPERTY: offering the same batch twice equals offering it once.
    #[test]
    fn property_reoffer_is_idempotent(
        prefix in batch(),
        repeated in batch()
    ) {
        let manifest = RequiredManifest::facebook_export();
        let accepted = run(&manifest, &[prefix]);

        let once = reconcile(&manifest, &accepted, offered(&repeated));
        let twice = reconcile(&manifest, &once.merged, offered(&repeated));

        prop_assert_eq!(&once.merged, &twice.merged);
        prop_assert_eq!(&once.missing, &twice.missing);
        prop_assert_eq!(&once.extra, &twice.extra);
        prop_assert!(twice.added.is_empty());
    }

    /// PROPERTY: missing is exactly the manifest minus merged names, in manifest order.
    #[test]
    fn property_missing_is_manifest_minus_merged(
        batches in proptest::collection::vec(batch(), 0..6)
    ) {
        let manifest = RequiredManifest::facebook_export();
        let mut accepted = Vec::new();
        let mut last = reconcile(&manifest, &accepted, Vec::new());
        for b in &batches {
            last = reconcile(&manifest, &accepted, offered(b));
            accepted = last.merged.clone();
        }

        let merged_names: HashSet<&str> = last.merged.iter().map(|f| f.name()).collect();
        let expected: Vec<String> = manifest
            .names()
            .filter(|n| !merged_names.contains(n))
            .map(str::to_string)
            .collect();
        prop_assert_eq!(&last.missing, &expected);
        prop_assert_eq!(last.found_count, manifest.len() - expected.len());

        for name in &last.extra {
            prop_assert!(!manifest.contains(name));
        }
    }
}
