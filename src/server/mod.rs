//! HTTP/JSON surface over the list service.

pub mod api_error;
pub mod error_mapping;
pub mod handlers;
mod service;

pub use api_error::{ApiError, ErrorKind};
pub use service::{ItemRow, ListService};

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::http_logging::HttpLoggingLayer;

/// Build the application router.
///
/// | Method | Path             | Handler                        |
/// |--------|------------------|--------------------------------|
/// | GET    | `/items`         | page of items with selection   |
/// | GET    | `/items/count`   | number of matching items       |
/// | GET    | `/state`         | selected ids                   |
/// | POST   | `/save-state`    | replace selected ids           |
/// | POST   | `/reorder`       | anchor-mode move               |
/// | POST   | `/reorder/index` | index-mode move                |
/// | GET    | `/health`        | liveness                       |
pub fn build_router(service: Arc<ListService>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/items", get(handlers::list_items))
        .route("/items/count", get(handlers::count_items))
        .route("/state", get(handlers::get_state))
        .route("/save-state", post(handlers::save_state))
        .route("/reorder", post(handlers::reorder_between))
        .route("/reorder/index", post(handlers::reorder_to_index))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(HttpLoggingLayer)
        .with_state(service)
}
