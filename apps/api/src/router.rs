use std::sync::Arc;

use axum::{
    Json, Router,
    routing::get,
};
use serde_json::{json, Value};

use auth_cell::router::auth_routes;
use booking_cell::booking_routes;
use doctor_cell::doctor_routes;
use notification_cell::NotificationQueue;
use payment_cell::payment_routes;
use service_cell::router::service_routes;
use shared_config::AppConfig;
use user_cell::router::user_routes;

async fn root() -> Json<Value> {
    Json(json!({ "message": "Server Connected" }))
}

pub fn create_router(state: Arc<AppConfig>, notifier: NotificationQueue) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(auth_routes(state.clone()))
        .merge(service_routes(state.clone()))
        .merge(booking_routes(state.clone(), notifier))
        .merge(user_routes(state.clone()))
        .merge(doctor_routes(state.clone()))
        .merge(payment_routes(state))
}
