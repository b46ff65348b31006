use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn service_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new()
        .route("/services", get(handlers::get_services))
        .route("/available", get(handlers::get_available_services));

    let protected_routes = Router::new()
        .route("/servicesName", get(handlers::get_service_names))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
