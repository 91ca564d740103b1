use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::item::{ItemId, ItemStore, SortKey};
use crate::metrics::{generate_request_id, OperationTimer};
use crate::query::{query_page, total_matches, PageRequest};
use crate::reorder::{AnchorMove, IndexMove, ReorderEngine, ReorderError, ReorderOutcome};
use crate::selection::SelectionState;
use crate::user_config::{QueryConfig, UserConfig};

/// One row of a page as returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: ItemId,
    pub value: u32,
    pub sort_key: SortKey,
    pub selected: bool,
}

/// Owns the item store and the selection and serializes access to them.
///
/// Locks are always taken store first, then selection.
#[derive(Debug)]
pub struct ListService {
    store: RwLock<ItemStore>,
    selection: RwLock<SelectionState>,
    query_config: QueryConfig,
    reorder: ReorderEngine,
}

impl ListService {
    /// Build a service with `config.store.item_count` seeded items.
    #[must_use]
    pub fn new(config: &UserConfig) -> Self {
        let timer = OperationTimer::new("seed_store");
        let store = ItemStore::seeded(config.store.item_count);
        info!(
            items = store.len(),
            duration_ms = %timer.elapsed().as_millis(),
            "Item store ready"
        );
        Self::with_store(store, config)
    }

    /// Build a service around an existing store.
    #[must_use]
    pub fn with_store(store: ItemStore, config: &UserConfig) -> Self {
        Self {
            store: RwLock::new(store),
            selection: RwLock::new(SelectionState::new()),
            query_config: config.query,
            reorder: ReorderEngine::new(&config.reorder),
        }
    }

    #[must_use]
    pub fn query_config(&self) -> &QueryConfig {
        &self.query_config
    }

    /// A page of items in display order, flagged with their selection state.
    pub async fn items_page(&self, page: &PageRequest) -> Vec<ItemRow> {
        let _timer = OperationTimer::new("items_page");
        let store = self.store.read().await;
        let items = query_page(&store, page);
        let selection = self.selection.read().await;
        items
            .into_iter()
            .map(|item| ItemRow {
                id: item.id,
                value: item.value,
                sort_key: item.sort_key,
                selected: selection.is_selected(item.id),
            })
            .collect()
    }

    /// Number of items matching `search`.
    pub async fn count(&self, search: &str) -> usize {
        let _timer = OperationTimer::new("count");
        total_matches(&*self.store.read().await, search)
    }

    /// Currently selected ids, ascending.
    pub async fn selection(&self) -> Vec<ItemId> {
        self.selection.read().await.get_state()
    }

    /// Replace the selection from a raw `selected` payload. Non-arrays are
    /// ignored. Returns whether the selection changed hands.
    pub async fn save_selection(&self, payload: &Value) -> bool {
        let mut selection = self.selection.write().await;
        let replaced = selection.replace_state_from_json(payload);
        if replaced {
            info!(selected = selection.len(), "Selection saved");
        }
        replaced
    }

    /// Anchor-mode reorder.
    pub async fn reorder_between(&self, request: AnchorMove) -> Result<ReorderOutcome, ReorderError> {
        let _timer = OperationTimer::new("reorder_between");
        let request_id = generate_request_id();
        let mut store = self.store.write().await;
        let outcome = self.reorder.move_between(&mut store, request);
        log_outcome(&request_id, &outcome);
        outcome
    }

    /// Index-mode reorder within the view filtered by `request.search`.
    pub async fn reorder_to_index(&self, request: &IndexMove) -> Result<ReorderOutcome, ReorderError> {
        let _timer = OperationTimer::new("reorder_to_index");
        let request_id = generate_request_id();
        let mut store = self.store.write().await;
        let outcome = self.reorder.move_to_index(&mut store, request);
        log_outcome(&request_id, &outcome);
        outcome
    }
}

fn log_outcome(request_id: &str, outcome: &Result<ReorderOutcome, ReorderError>) {
    match outcome {
        Ok(moved) => info!(
            request_id,
            id = %moved.id,
            key = moved.key.get(),
            renumbered = moved.renumbered,
            "Item reordered"
        ),
        Err(e) => info!(request_id, error = %e, "Reorder rejected"),
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
