//! Item domain: identifiers, ordering keys and the in-memory item store.
//!
//! Items are seeded once at startup and never inserted or deleted afterwards.
//! The only mutable attribute is the ordering key, which the reorder engine
//! rewrites through [`ItemStore::set_sort_key`].

pub mod error;
pub mod id;
pub mod key;
pub mod store;

pub use error::ItemError;
pub use id::ItemId;
pub use key::{SortKey, SortPosition};
pub use store::ItemStore;

use serde::Serialize;

/// A single list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Display payload; equals the id at creation.
    pub value: u32,
    pub sort_key: SortKey,
}

impl Item {
    /// Position of this item in the global `(sort_key, id)` ordering.
    #[must_use]
    pub fn position(&self) -> SortPosition {
        SortPosition {
            key: self.sort_key,
            id: self.id,
        }
    }
}
