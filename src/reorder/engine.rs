use tracing::{debug, info};

use super::{compute_key, Placement, ReorderError};
use crate::item::{ItemId, ItemStore, SortKey};
use crate::query::filtered_ids;
use crate::user_config::ReorderConfig;

/// Move request naming the moved item and its new neighbors by id.
///
/// Neighbor ids that do not resolve to an item count as absent, so a stale
/// or missing `before`/`after` degrades to a head or tail move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorMove {
    pub moved: Option<ItemId>,
    pub before: Option<ItemId>,
    pub after: Option<ItemId>,
}

/// Move request by position within the view filtered by `search`.
///
/// The item at `from` is taken out of the view and re-inserted at `to`.
/// `None` stands for a value that was not a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexMove {
    pub from: Option<usize>,
    pub to: Option<usize>,
    pub search: String,
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderOutcome {
    pub id: ItemId,
    pub key: SortKey,
    /// Whether the store had to be renumbered to make room.
    pub renumbered: bool,
}

/// Computes and applies new ordering keys.
#[derive(Debug, Clone, Copy)]
pub struct ReorderEngine {
    min_gap: f64,
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new(&ReorderConfig::default())
    }
}

impl ReorderEngine {
    #[must_use]
    pub fn new(config: &ReorderConfig) -> Self {
        Self {
            min_gap: config.min_gap,
        }
    }

    /// Place `request.moved` between `request.before` and `request.after`.
    pub fn move_between(
        &self,
        store: &mut ItemStore,
        request: AnchorMove,
    ) -> Result<ReorderOutcome, ReorderError> {
        let moved = request
            .moved
            .filter(|id| store.find_by_id(*id).is_ok())
            .ok_or(ReorderError::MovedItemNotFound)?;
        let before = request.before.filter(|id| store.find_by_id(*id).is_ok());
        let after = request.after.filter(|id| store.find_by_id(*id).is_ok());
        self.apply(store, moved, before, after)
    }

    /// Move the item at `request.from` to `request.to` within the filtered
    /// view.
    pub fn move_to_index(
        &self,
        store: &mut ItemStore,
        request: &IndexMove,
    ) -> Result<ReorderOutcome, ReorderError> {
        let view = filtered_ids(store, &request.search);
        let len = view.len();
        let invalid = || ReorderError::InvalidIndices {
            from: request.from,
            to: request.to,
            len,
        };
        let (from, to) = request
            .from
            .zip(request.to)
            .filter(|(from, to)| *from < len && *to < len)
            .ok_or_else(invalid)?;
        let moved = view.get(from).copied().ok_or_else(invalid)?;
        // Neighbors come from the view with the moved item taken out
        let before = to.checked_sub(1).and_then(|slot| without(&view, from, slot));
        let after = without(&view, from, to);
        debug!(%moved, from, to, len, "Resolved index move");
        self.apply(store, moved, before, after)
    }

    fn apply(
        &self,
        store: &mut ItemStore,
        moved: ItemId,
        before: Option<ItemId>,
        after: Option<ItemId>,
    ) -> Result<ReorderOutcome, ReorderError> {
        let mut placement = placement_of(store, before, after)?;
        let mut renumbered = false;
        let key = match compute_key(placement).filter(|key| placement.admits(*key, self.min_gap)) {
            Some(key) => key,
            None => {
                info!(%moved, "Ordering gap exhausted, renumbering keys");
                store.renumber();
                renumbered = true;
                placement = placement_of(store, before, after)?;
                compute_key(placement).unwrap_or(SortKey::ZERO)
            }
        };
        store.set_sort_key(moved, key)?;
        debug!(%moved, key = key.get(), renumbered, "Applied reorder");
        Ok(ReorderOutcome {
            id: moved,
            key,
            renumbered,
        })
    }
}

fn placement_of(
    store: &ItemStore,
    before: Option<ItemId>,
    after: Option<ItemId>,
) -> Result<Placement, ReorderError> {
    let key_of = |neighbor: Option<ItemId>| -> Result<Option<SortKey>, ReorderError> {
        neighbor
            .map(|id| store.find_by_id(id).map(|item| item.sort_key))
            .transpose()
            .map_err(ReorderError::from)
    };
    Ok(Placement {
        before: key_of(before)?,
        after: key_of(after)?,
    })
}

/// Element `slot` of `view` once the element at `removed` is taken out.
fn without(view: &[ItemId], removed: usize, slot: usize) -> Option<ItemId> {
    let index = if slot < removed {
        Some(slot)
    } else {
        slot.checked_add(1)
    };
    index.and_then(|i| view.get(i)).copied()
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
