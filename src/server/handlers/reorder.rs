use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use super::{json_body, SuccessResponse};
use crate::item::ItemId;
use crate::reorder::{AnchorMove, IndexMove};
use crate::server::api_error::ApiError;
use crate::server::service::ListService;

/// `POST /reorder` with `{"movedId", "beforeId", "afterId"}`.
pub async fn reorder_between(
    State(service): State<Arc<ListService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let body = json_body(payload)?;
    let request = AnchorMove {
        moved: id_field(&body, "movedId"),
        before: id_field(&body, "beforeId"),
        after: id_field(&body, "afterId"),
    };
    service
        .reorder_between(request)
        .await
        .map_err(|e| ApiError::from_domain(&e))?;
    Ok(Json(SuccessResponse::ok()))
}

/// `POST /reorder/index` with `{"from", "to", "search"}`.
pub async fn reorder_to_index(
    State(service): State<Arc<ListService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let body = json_body(payload)?;
    let request = IndexMove {
        from: index_field(&body, "from"),
        to: index_field(&body, "to"),
        search: body
            .get("search")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    };
    service
        .reorder_to_index(&request)
        .await
        .map_err(|e| ApiError::from_domain(&e))?;
    Ok(Json(SuccessResponse::ok()))
}

fn id_field(body: &Value, name: &str) -> Option<ItemId> {
    body.get(name).and_then(ItemId::from_json)
}

fn index_field(body: &Value, name: &str) -> Option<usize> {
    body.get(name)
        .and_then(Value::as_u64)
        .and_then(|raw| usize::try_from(raw).ok())
}
