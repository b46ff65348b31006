use std::sync::Arc;

use axum::{
    Router,
    routing::put,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn auth_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/getToken/{email}", put(handlers::issue_token))
        .with_state(state)
}
