#![allow(clippy::float_arithmetic)]

use crate::item::SortKey;

/// The keys of the items the moved item should sit between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub before: Option<SortKey>,
    pub after: Option<SortKey>,
}

impl Placement {
    /// Whether `key` sits strictly inside this placement and the gap it was
    /// taken from is at least `min_gap` wide.
    #[must_use]
    pub fn admits(&self, key: SortKey, min_gap: f64) -> bool {
        let k = key.get();
        match (self.before, self.after) {
            (Some(before), Some(after)) => {
                let (lo, hi) = if before <= after {
                    (before.get(), after.get())
                } else {
                    (after.get(), before.get())
                };
                hi - lo >= min_gap && lo < k && k < hi
            }
            (Some(before), None) => before.get() < k,
            (None, Some(after)) => k < after.get(),
            (None, None) => true,
        }
    }
}

/// Key for an item placed according to `placement`.
///
/// - both neighbors: midpoint
/// - only `before` (tail): `before + 1`
/// - only `after` (head): `after - 1`
/// - neither: `0`
///
/// Returns `None` if the arithmetic leaves the finite range.
#[must_use]
pub fn compute_key(placement: Placement) -> Option<SortKey> {
    let raw = match (placement.before, placement.after) {
        (Some(before), Some(after)) => (before.get() + after.get()) / 2.0,
        (Some(before), None) => before.get() + 1.0,
        (None, Some(after)) => after.get() - 1.0,
        (None, None) => 0.0,
    };
    SortKey::try_from(raw).ok()
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod key_tests;
