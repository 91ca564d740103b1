use std::collections::BTreeSet;

use tracing::debug;

use super::{Item, ItemError, ItemId, SortKey, SortPosition};

/// In-memory collection of every item plus an ordered index over
/// `(sort_key, id)`.
///
/// `items[i].id == i + 1` for the lifetime of the store. The ordered index
/// always holds exactly one position per item, matching its current key.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    order: BTreeSet<SortPosition>,
}

impl ItemStore {
    /// Create `count` items with ids `1..=count`, `value == id` and
    /// `sort_key == id`.
    #[must_use]
    pub fn seeded(count: u32) -> Self {
        let items: Vec<Item> = (1..=count)
            .map(|raw| Item {
                id: ItemId::new(raw),
                value: raw,
                sort_key: SortKey::from_rank(raw),
            })
            .collect();
        let order = items.iter().map(Item::position).collect();
        debug!(count, "Seeded item store");
        Self { items, order }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in display order (`sort_key`, then `id`).
    pub fn list_all(&self) -> impl Iterator<Item = &Item> + '_ {
        self.order.iter().filter_map(|pos| self.slot(pos.id))
    }

    /// Look up an item by id.
    pub fn find_by_id(&self, id: ItemId) -> Result<&Item, ItemError> {
        self.slot(id).ok_or(ItemError::NotFound(id))
    }

    /// Replace an item's ordering key, returning the previous one.
    pub fn set_sort_key(&mut self, id: ItemId, key: SortKey) -> Result<SortKey, ItemError> {
        let item = slot_index(id)
            .and_then(|idx| self.items.get_mut(idx))
            .ok_or(ItemError::NotFound(id))?;
        let previous = item.sort_key;
        self.order.remove(&item.position());
        item.sort_key = key;
        self.order.insert(item.position());
        Ok(previous)
    }

    /// Reassign dense keys `1.0, 2.0, ...` following the current order.
    ///
    /// Relative order is unchanged; only the gaps between keys are restored.
    pub fn renumber(&mut self) {
        let ordered: Vec<ItemId> = self.order.iter().map(|pos| pos.id).collect();
        self.order.clear();
        for (rank, id) in (1..).zip(ordered) {
            if let Some(item) = slot_index(id).and_then(|idx| self.items.get_mut(idx)) {
                item.sort_key = SortKey::from_rank(rank);
                self.order.insert(item.position());
            }
        }
        debug!(count = self.items.len(), "Renumbered item keys");
    }

    fn slot(&self, id: ItemId) -> Option<&Item> {
        slot_index(id).and_then(|idx| self.items.get(idx))
    }
}

fn slot_index(id: ItemId) -> Option<usize> {
    id.get()
        .checked_sub(1)
        .and_then(|idx| usize::try_from(idx).ok())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
