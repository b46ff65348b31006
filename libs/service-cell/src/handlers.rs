use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::documents::Service;
use shared_models::error::AppError;

use crate::models::{AvailabilityQuery, AvailableService};
use crate::services::{AvailabilityService, CatalogService};

#[axum::debug_handler]
pub async fn get_services(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Vec<Service>>, AppError> {
    let catalog = CatalogService::new(&config);
    let services = catalog.list_services().await?;

    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn get_available_services(
    State(config): State<Arc<AppConfig>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<AvailableService>>, AppError> {
    let date = query
        .date
        .filter(|date| !date.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("date query parameter is required".to_string()))?;

    debug!("Listing available services on {}", date);

    let availability = AvailabilityService::new(&config);
    let services = availability.available_on(&date).await?;

    Ok(Json(services))
}

#[axum::debug_handler]
pub async fn get_service_names(
    State(config): State<Arc<AppConfig>>,
) -> Result<Json<Vec<Value>>, AppError> {
    let catalog = CatalogService::new(&config);
    let names = catalog.list_service_names().await?;

    Ok(Json(names))
}
