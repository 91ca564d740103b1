use thiserror::Error;

use crate::item::ItemError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReorderError {
    #[error("Moved item not found")]
    MovedItemNotFound,

    /// `from`/`to` are `None` when the client sent something other than a
    /// non-negative integer.
    #[error("Invalid indices")]
    InvalidIndices {
        from: Option<usize>,
        to: Option<usize>,
        len: usize,
    },

    #[error(transparent)]
    Item(#[from] ItemError),
}
