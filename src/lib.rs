#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        clippy::float_cmp,
        clippy::float_arithmetic
    )
)]

pub mod cors;
pub mod http_logging;
pub mod item;
pub mod logging;
pub mod metrics;
pub mod query;
pub mod reorder;
pub mod selection;
pub mod server;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use item::{Item, ItemError, ItemId, ItemStore, SortKey};
pub use query::{query, PageRequest};
pub use reorder::{AnchorMove, IndexMove, ReorderEngine, ReorderError, ReorderOutcome};
pub use selection::SelectionState;
pub use server::{build_router, ApiError, ListService};
pub use user_config::{load_user_config, UserConfig};
