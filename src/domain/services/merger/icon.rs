//! Icon merger

use std::collections::HashSet;

use crate::domain::entities::Combination;

/// `destination.icon_hashes` becomes the distinct union of both sides,
/// destination hashes first.
pub(super) fn merge_icons(destination: &mut Combination, source: &Combination) {
    let mut seen = HashSet::new();
    let hashes = destination
        .icon_hashes
        .iter()
        .chain(source.icon_hashes.iter())
        .filter(|hash| seen.insert((*hash).clone()))
        .cloned()
        .collect();
    destination.icon_hashes = hashes;
}
