//! Common test utilities

#![allow(dead_code)] // Each test binary uses a different subset

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::Router;
use http::{Request, StatusCode};
use list_order_daemon::cors::build_cors_layer;
use list_order_daemon::{build_router, ItemStore, ListService, UserConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh store with `count` seeded items
pub fn test_app(count: u32) -> Router {
    let service = ListService::with_store(ItemStore::seeded(count), &UserConfig::default());
    build_router(Arc::new(service), build_cors_layer(vec!["*".to_string()]))
}

/// Send a request and decode the JSON response
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router should not fail");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

/// Ids of the rows in an `/items` response
pub fn row_ids(rows: &Value) -> Vec<u64> {
    rows.as_array()
        .expect("rows should be an array")
        .iter()
        .map(|row| row["id"].as_u64().expect("id should be a number"))
        .collect()
}
