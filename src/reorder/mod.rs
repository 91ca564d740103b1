//! Drag-to-reorder: fractional ordering keys.
//!
//! A move rewrites exactly one item's key so that it lands between its new
//! neighbors; the rest of the collection is untouched. Two request shapes are
//! accepted ([`AnchorMove`] by neighbor ids, [`IndexMove`] by positions in a
//! filtered view) and both resolve to a [`Placement`] before the same key
//! rule runs.
//!
//! Repeated midpoint insertion into one gap eventually runs out of `f64`
//! precision. When that happens the store is renumbered densely and the key
//! is recomputed from the neighbors' fresh keys.

mod engine;
mod error;
mod key;

pub use engine::{AnchorMove, IndexMove, ReorderEngine, ReorderOutcome};
pub use error::ReorderError;
pub use key::{compute_key, Placement};
