use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, put},
    middleware,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::guard::admin_middleware;
use crate::handlers;

pub fn user_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new()
        .route("/isadmin", get(handlers::is_admin));

    let protected_routes = Router::new()
        .route("/allusers", get(handlers::get_all_users))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Layers run outermost-last: the token is checked before the role.
    let admin_routes = Router::new()
        .route("/admin/user", put(handlers::promote_user))
        .route("/delete/user", delete(handlers::delete_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .with_state(state)
}
