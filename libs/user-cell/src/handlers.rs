use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Extension, Json,
};

use shared_config::AppConfig;
use shared_database::{DeleteResult, UpdateResult};
use shared_models::auth::AuthUser;
use shared_models::documents::UserRecord;
use shared_models::error::AppError;
use shared_utils::json::AppJson;

use crate::models::{AdminStatus, EmailQuery, TargetUserRequest};
use crate::services::UserService;

#[axum::debug_handler]
pub async fn get_all_users(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Vec<UserRecord>>, AppError> {
    let user_service = UserService::new(&config);
    let users = user_service.list_users().await?;

    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn is_admin(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<AdminStatus>, AppError> {
    let Some(email) = query.email else {
        return Ok(Json(AdminStatus { is_admin: false }));
    };

    let user_service = UserService::new(&config);
    let is_admin = user_service.is_admin(&email).await?;

    Ok(Json(AdminStatus { is_admin }))
}

#[axum::debug_handler]
pub async fn promote_user(
    State(config): State<Arc<AppConfig>>,
    Extension(admin): Extension<AuthUser>,
    AppJson(request): AppJson<TargetUserRequest>,
) -> Result<Json<UpdateResult>, AppError> {
    tracing::info!("{} promotes {} to admin", admin.email, request.email);

    let user_service = UserService::new(&config);
    let result = user_service.promote_to_admin(&request.email).await?;

    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(config): State<Arc<AppConfig>>,
    Extension(admin): Extension<AuthUser>,
    AppJson(request): AppJson<TargetUserRequest>,
) -> Result<Json<DeleteResult>, AppError> {
    tracing::info!("{} deletes user {}", admin.email, request.email);

    let user_service = UserService::new(&config);
    let result = user_service.delete_user(&request.email).await?;

    Ok(Json(result))
}
