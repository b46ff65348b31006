use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::json::AppJson;
use shared_utils::jwt::sign_token;
use user_cell::UserService;

use crate::models::TokenResponse;

/// Upserts the user's profile and hands back a signed access token.
#[axum::debug_handler]
pub async fn issue_token(
    State(config): State<Arc<AppConfig>>,
    Path(email): Path<String>,
    AppJson(profile): AppJson<Map<String, Value>>,
) -> Result<Json<TokenResponse>, AppError> {
    if email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }
    debug!("Issuing token for {}", email);

    let user_service = UserService::new(&config);
    let result = user_service.upsert_profile(&email, profile).await?;

    let access_token = sign_token(&email, &config.access_token_secret, config.access_token_ttl_hours)
        .map_err(|e| {
            error!("Failed to sign token for {}: {}", email, e);
            AppError::Internal("Failed to issue access token".to_string())
        })?;

    Ok(Json(TokenResponse {
        result,
        access_token,
    }))
}
