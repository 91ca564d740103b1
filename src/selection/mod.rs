//! Process-wide set of selected item ids.
//!
//! Selection is independent of ordering and of the item store: ids that no
//! longer match the current search, or that never existed, stay selected
//! until the client declares a new set.

use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use crate::item::ItemId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<ItemId>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids in ascending order.
    #[must_use]
    pub fn get_state(&self) -> Vec<ItemId> {
        self.selected.iter().copied().collect()
    }

    /// Overwrite the whole selection; duplicates collapse.
    pub fn replace_state<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ItemId>,
    {
        self.selected = ids.into_iter().collect();
    }

    /// Replace the selection from a client-supplied JSON value.
    ///
    /// Anything other than an array is ignored and leaves the selection
    /// as-is. Array elements that are not valid ids are skipped. Returns
    /// whether the selection was replaced.
    pub fn replace_state_from_json(&mut self, payload: &Value) -> bool {
        let Some(entries) = payload.as_array() else {
            debug!("Ignoring non-array selection payload");
            return false;
        };
        let ids: BTreeSet<ItemId> = entries.iter().filter_map(ItemId::from_json).collect();
        let skipped = entries.len().saturating_sub(ids.len());
        if skipped > 0 {
            debug!(skipped, "Dropped duplicate or invalid selection entries");
        }
        self.selected = ids;
        true
    }

    #[must_use]
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
