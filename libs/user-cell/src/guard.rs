use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_utils::extractor::UNAUTHORIZED_ACCESS;

use crate::services::UserService;

pub const NOT_ADMIN: &str = "You are not admin";

/// Admin gate. Must be layered inside `auth_middleware`, which supplies the [`AuthUser`].
pub async fn admin_middleware(
    State(config): State<Arc<AppConfig>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized(UNAUTHORIZED_ACCESS.to_string()))?;

    let user_service = UserService::new(&config);
    if !user_service.is_admin(&user.email).await? {
        debug!("{} is not an admin", user.email);
        return Err(AppError::Forbidden(NOT_ADMIN.to_string()));
    }

    Ok(next.run(request).await)
}
