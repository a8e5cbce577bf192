#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use cookbook_registry::api::handlers::health_handler;
use cookbook_registry::api::routes::cookbook_routes;
use cookbook_registry::application::services::CookbookService;
use cookbook_registry::domain::Cookbook;
use cookbook_registry::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(CookbookService::new(Cookbook::new())))
}

pub fn make_server() -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(cookbook_routes())
        .with_state(create_test_state());
    TestServer::new(app).unwrap()
}

pub fn ingredient(name: &str, cook_time: u64) -> Value {
    json!({ "type": "ingredient", "name": name, "cookTime": cook_time })
}

pub fn recipe(name: &str, items: &[(&str, u64)]) -> Value {
    let required_items: Vec<Value> = items
        .iter()
        .map(|(item, quantity)| json!({ "name": item, "quantity": quantity }))
        .collect();
    json!({ "type": "recipe", "name": name, "requiredItems": required_items })
}

pub async fn create_entry(server: &TestServer, body: Value) {
    server.post("/entry").json(&body).await.assert_status_ok();
}
