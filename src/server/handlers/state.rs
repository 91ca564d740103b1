use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::{json_body, SuccessResponse};
use crate::item::ItemId;
use crate::server::api_error::ApiError;
use crate::server::service::ListService;

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub selected: Vec<ItemId>,
}

pub async fn get_state(State(service): State<Arc<ListService>>) -> Json<StateResponse> {
    Json(StateResponse {
        selected: service.selection().await,
    })
}

/// `POST /save-state` with `{"selected": [...]}`.
///
/// A missing or non-array `selected` is accepted and ignored.
pub async fn save_state(
    State(service): State<Arc<ListService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let body = json_body(payload)?;
    let selected = body.get("selected").cloned().unwrap_or_default();
    service.save_selection(&selected).await;
    Ok(Json(SuccessResponse::ok()))
}
