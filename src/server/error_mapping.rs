use super::api_error::ErrorKind;
use crate::item::ItemError;
use crate::reorder::ReorderError;

/// Trait for mapping domain errors to stable error codes and a taxonomy kind.
pub trait ToStructuredError {
    fn error_code_and_kind(&self) -> (&'static str, ErrorKind);
}

// ── ItemError ──────────────────────────────────────────────────────────────────
impl ToStructuredError for ItemError {
    fn error_code_and_kind(&self) -> (&'static str, ErrorKind) {
        match self {
            ItemError::NotFound(_) => ("ITEM_NOT_FOUND", ErrorKind::NotFound),
            ItemError::InvalidKey(_) => ("INVALID_SORT_KEY", ErrorKind::InvalidArgument),
        }
    }
}

// ── ReorderError ───────────────────────────────────────────────────────────────
impl ToStructuredError for ReorderError {
    fn error_code_and_kind(&self) -> (&'static str, ErrorKind) {
        match self {
            ReorderError::MovedItemNotFound => ("MOVED_ITEM_NOT_FOUND", ErrorKind::NotFound),
            ReorderError::InvalidIndices { .. } => ("INVALID_INDICES", ErrorKind::InvalidArgument),
            ReorderError::Item(inner) => inner.error_code_and_kind(),
        }
    }
}
