use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde_json::{Map, Value};

use shared_config::AppConfig;
use shared_database::InsertResult;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_utils::json::AppJson;

use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn add_doctor(
    State(config): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    AppJson(doctor): AppJson<Map<String, Value>>,
) -> Result<Json<InsertResult>, AppError> {
    tracing::info!("{} registers a doctor", user.email);

    let doctor_service = DoctorService::new(&config);
    let result = doctor_service.add_doctor(doctor).await?;

    Ok(Json(result))
}
