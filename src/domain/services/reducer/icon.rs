//! Icon reducer

use std::collections::HashSet;

use crate::domain::entities::Combination;
use crate::domain::value_objects::ContentHash;

/// Drop every icon hash the baseline already has.
pub(super) fn reduce_icons(combination: &mut Combination, baseline: &Combination) {
    let inherited: HashSet<&ContentHash> = baseline.icon_hashes.iter().collect();
    combination
        .icon_hashes
        .retain(|hash| !inherited.contains(hash));
}
