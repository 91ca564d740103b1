//! Error types for item store operations.

use thiserror::Error;

use super::ItemId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Invalid sort key: {0}")]
    InvalidKey(f64),
}
