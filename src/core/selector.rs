//! # Item Selector
//!
//! Picks the next drill item. The catalog is split into three disjoint
//! pools, then one pool is chosen by a weighted roll:
//!
//! ```text
//! roll in [0, 100)
//!   < 40  → frequently wrong   (if any)
//!   < 70  → needs review       (if any)
//!   else  → remaining          (or the whole catalog if empty)
//! ```

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::catalog::{Catalog, KanaItem};
use crate::core::exercise::ExerciseType;
use crate::core::scoring::Scorer;

/// Rolls below this go to the frequently-wrong pool.
pub const FREQUENTLY_WRONG_CUTOFF: f64 = 40.0;
/// Rolls below this (and not taken above) go to the needs-review pool.
pub const NEEDS_REVIEW_CUTOFF: f64 = 70.0;

/// Catalog split by scoring signals for one exercise type.
#[derive(Debug, Default)]
pub struct Pools<'a> {
    pub frequently_wrong: Vec<&'a KanaItem>,
    pub needs_review: Vec<&'a KanaItem>,
    pub remaining: Vec<&'a KanaItem>,
}

/// Sort every catalog item into exactly one pool.
pub fn partition<'a>(catalog: &'a Catalog, exercise: ExerciseType, scorer: &Scorer) -> Pools<'a> {
    let mut pools = Pools::default();
    for item in catalog.items() {
        if scorer.is_frequently_wrong(&item.reading, exercise) {
            pools.frequently_wrong.push(item);
        } else if scorer.needs_review(&item.reading, exercise) {
            pools.needs_review.push(item);
        } else {
            pools.remaining.push(item);
        }
    }
    pools
}

/// Choose the next item to drill. Always returns an item from `catalog`.
pub fn select_next_item<'a, R: Rng>(
    catalog: &'a Catalog,
    exercise: ExerciseType,
    scorer: &Scorer,
    rng: &mut R,
) -> &'a KanaItem {
    let pools = partition(catalog, exercise, scorer);
    let roll: f64 = rng.random_range(0.0..100.0);

    let pool = if roll < FREQUENTLY_WRONG_CUTOFF && !pools.frequently_wrong.is_empty() {
        &pools.frequently_wrong
    } else if roll < NEEDS_REVIEW_CUTOFF && !pools.needs_review.is_empty() {
        &pools.needs_review
    } else {
        &pools.remaining
    };

    match pool.choose(rng).copied() {
        Some(item) => item,
        // Only reachable when `remaining` is empty
        None => catalog
            .items()
            .choose(rng)
            .unwrap_or_else(|| catalog.first()),
    }
}
