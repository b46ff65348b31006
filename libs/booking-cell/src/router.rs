use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use notification_cell::NotificationQueue;
use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;
use crate::models::BookingState;

pub fn booking_routes(config: Arc<AppConfig>, notifier: NotificationQueue) -> Router {
    let state = Arc::new(BookingState {
        config: config.clone(),
        notifier,
    });

    let public_routes = Router::new()
        .route("/booking", post(handlers::create_booking));

    let protected_routes = Router::new()
        .route("/myappointment", get(handlers::get_my_appointments))
        .route("/singleService/{id}", get(handlers::get_booking))
        .route_layer(middleware::from_fn_with_state(config, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
