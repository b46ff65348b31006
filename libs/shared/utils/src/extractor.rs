use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::jwt::validate_token;

pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized Access";
pub const FORBIDDEN_ACCESS: &str = "Forbidden Access";

#[derive(Debug, Deserialize)]
struct IdentityQuery {
    email: Option<String>,
}

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let auth_value = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(UNAUTHORIZED_ACCESS.to_string()))?;

    auth_value
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized(UNAUTHORIZED_ACCESS.to_string()))
}

/// Bearer-token gate. The token's `email` claim must equal the `email`
/// query parameter of the request.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers())?;

    let claims = validate_token(&token, &config.access_token_secret)
        .map_err(|_| AppError::Forbidden(FORBIDDEN_ACCESS.to_string()))?;

    let requested_email = Query::<IdentityQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(query)| query.email);

    if requested_email.as_deref() != Some(claims.email.as_str()) {
        debug!(
            "Token identity {} does not match requested {:?}",
            claims.email, requested_email
        );
        return Err(AppError::Unauthorized(UNAUTHORIZED_ACCESS.to_string()));
    }

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}
