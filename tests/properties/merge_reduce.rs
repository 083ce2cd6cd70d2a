//! Property tests for merging and reducing.

use std::collections::HashSet;

use proptest::prelude::*;

use export_lattice::domain::entities::{Combination, Entity};
use export_lattice::domain::value_objects::EntityKind;

use crate::common::*;

fn labelled_items() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[a-d]", "[A-Z][a-z]{0,3}"), 0..6)
}

fn unique_by_name(specs: &[(String, String)]) -> Vec<(String, String)> {
    let mut unique = specs.to_vec();
    unique.sort();
    unique.dedup_by(|a, b| a.0 == b.0);
    unique
}

fn entities(specs: &[(String, String)]) -> Vec<Entity> {
    specs.iter().map(|(name, label)| item(name, label)).collect()
}

fn sorted_items(combination: &Combination) -> Vec<String> {
    let mut hashes: Vec<String> = combination
        .item_hashes
        .iter()
        .map(|h| h.as_str().to_string())
        .collect();
    hashes.sort();
    hashes
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging a combination into itself changes nothing.
    #[test]
    fn property_merge_is_idempotent(specs in labelled_items()) {
        let env = LatticeEnv::builder().base_with_optionals(0).build();
        env.generate("base");
        env.fill("base", EntityKind::Item, &entities(&unique_by_name(&specs)));
        let base = env.combination("base");

        let merged = env.merger().merged(&base, &base).unwrap();

        prop_assert_eq!(sorted_items(&merged), sorted_items(&base));
    }

    /// PROPERTY: a reduced child never contains a hash its baseline has.
    #[test]
    fn property_reduced_child_shares_no_hash_with_baseline(
        parent_specs in labelled_items(),
        child_specs in labelled_items(),
    ) {
        let env = LatticeEnv::builder().base_with_optionals(1).build();
        env.generate("base");
        env.fill("base", EntityKind::Item, &entities(&parent_specs));
        env.fill("base-a", EntityKind::Item, &entities(&child_specs));
        let child = env.combination("base-a");

        let reducer = env.reducer();
        let baseline = reducer.parent_finder().merged_ancestor_baseline(&child).unwrap();
        let reduced = reducer.reduce_against(&child, &baseline).unwrap();

        for hash in &reduced.item_hashes {
            prop_assert!(!baseline.item_hashes.contains(hash));
        }
    }

    /// PROPERTY: reducing is a no-op when the baseline is empty.
    #[test]
    fn property_reduce_against_empty_baseline_keeps_everything(specs in labelled_items()) {
        let env = LatticeEnv::builder().base_with_optionals(0).build();
        env.generate("base");
        env.fill("base", EntityKind::Item, &entities(&specs));
        let base = env.combination("base");

        let reduced = env.reducer().reduce(&base).unwrap();

        prop_assert_eq!(reduced.item_hashes, base.item_hashes);
    }

    /// PROPERTY: merging the same source twice equals merging it once.
    #[test]
    fn property_merging_twice_equals_merging_once(
        destination in labelled_items(),
        source in labelled_items(),
    ) {
        let env = LatticeEnv::builder().base_with_optionals(1).build();
        env.generate("base");
        env.fill("base", EntityKind::Item, &entities(&unique_by_name(&destination)));
        env.fill("base-a", EntityKind::Item, &entities(&unique_by_name(&source)));
        let base = env.combination("base");
        let child = env.combination("base-a");
        let merger = env.merger();

        let once = merger.merged(&base, &child).unwrap();
        let twice = merger.merged(&once, &child).unwrap();

        prop_assert_eq!(sorted_items(&twice), sorted_items(&once));
    }

    /// PROPERTY: icon merge is the distinct union of both sides.
    #[test]
    fn property_icon_merge_is_set_union(
        left in proptest::collection::vec("[a-f]", 0..6),
        right in proptest::collection::vec("[a-f]", 0..6),
    ) {
        let env = LatticeEnv::builder().base_with_optionals(1).build();
        env.generate("base");
        let icons = |names: &[String]| -> Vec<Entity> {
            names.iter().map(|n| icon(&[n.as_str()])).collect()
        };
        let left_hashes = env.fill("base", EntityKind::Icon, &icons(&left[..]));
        let right_hashes = env.fill("base-a", EntityKind::Icon, &icons(&right[..]));

        let merged = env
            .merger()
            .merged(&env.combination("base"), &env.combination("base-a"))
            .unwrap();

        let union: HashSet<_> = left_hashes.iter().chain(right_hashes.iter()).collect();
        let distinct: HashSet<_> = merged.icon_hashes.iter().collect();
        prop_assert_eq!(merged.icon_hashes.len(), union.len());
        prop_assert_eq!(distinct.len(), union.len());
    }
}
