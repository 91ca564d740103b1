mod health;
mod items;
mod reorder;
mod state;

pub use health::health;
pub use items::{count_items, list_items};
pub use reorder::{reorder_between, reorder_to_index};
pub use state::{get_state, save_state};

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::api_error::ApiError;

/// `{"success": true}` acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Unwrap a JSON body, turning framework rejections into our error taxonomy.
fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::invalid_argument(rejection.body_text()))
}
