use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::query::PageRequest;
use crate::server::service::{ItemRow, ListService};

/// Raw query string for `GET /items`; values are parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct ItemsParams {
    pub skip: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountParams {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total: usize,
}

pub async fn list_items(
    State(service): State<Arc<ListService>>,
    Query(params): Query<ItemsParams>,
) -> Json<Vec<ItemRow>> {
    let page = PageRequest::from_raw(
        params.skip.as_deref(),
        params.limit.as_deref(),
        params.search.as_deref(),
        service.query_config(),
    );
    Json(service.items_page(&page).await)
}

pub async fn count_items(
    State(service): State<Arc<ListService>>,
    Query(params): Query<CountParams>,
) -> Json<CountResponse> {
    let total = service.count(params.search.as_deref().unwrap_or_default()).await;
    Json(CountResponse { total })
}
