use std::cmp::Ordering;

use serde::Serialize;

use super::{ItemError, ItemId};

/// Floating-point ordering key; lower sorts first.
///
/// Always finite. Ordered with `f64::total_cmp`, and `-0.0` is folded into
/// `0.0` on construction so equal keys compare equal.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct SortKey(f64);

impl SortKey {
    pub const ZERO: Self = Self(0.0);

    /// Key for the `rank`-th item in a dense numbering (`1.0`, `2.0`, ...).
    #[must_use]
    pub fn from_rank(rank: u32) -> Self {
        Self(f64::from(rank))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for SortKey {
    type Error = ItemError;

    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        if raw.is_finite() {
            // -0.0 + 0.0 == +0.0
            #[allow(clippy::float_arithmetic)]
            let folded = raw + 0.0;
            Ok(Self(folded))
        } else {
            Err(ItemError::InvalidKey(raw))
        }
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Total display order: by key, ties broken by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortPosition {
    pub key: SortKey,
    pub id: ItemId,
}
