use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde_json::{json, Value};
use tracing::{debug, warn};

use notification_cell::EmailMessage;
use shared_database::StoreError;
use shared_models::auth::AuthUser;
use shared_models::documents::Booking;
use shared_models::error::AppError;
use shared_utils::json::AppJson;

use crate::models::{AppointmentQuery, BookingOutcome, BookingState};
use crate::services::BookingService;

fn validate_booking(booking: &Booking) -> Result<(), AppError> {
    let required = [
        ("email", &booking.email),
        ("service", &booking.service),
        ("bookingDate", &booking.booking_date),
        ("timeSlot", &booking.time_slot),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }
    }

    Ok(())
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<BookingState>>,
    AppJson(request): AppJson<Booking>,
) -> Result<Json<Value>, AppError> {
    validate_booking(&request)?;

    let booking_service = BookingService::new(&state.config);

    let outcome = booking_service.create_booking(request).await.map_err(|e| match e {
        StoreError::Conflict(_) => AppError::Conflict("This time slot is already booked".to_string()),
        other => AppError::from(other),
    })?;

    match outcome {
        BookingOutcome::AlreadyBooked(existing) => Ok(Json(json!({
            "success": false,
            "booking": existing
        }))),
        BookingOutcome::Created(booking) => {
            if !state.notifier.enqueue(EmailMessage::booking_confirmation(&booking)) {
                warn!("Confirmation email for {} was not queued", booking.email);
            }

            Ok(Json(json!({
                "success": true,
                "result": booking
            })))
        }
    }
}

#[axum::debug_handler]
pub async fn get_my_appointments(
    State(state): State<Arc<BookingState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Value>, AppError> {
    debug!("Listing appointments of {} on {:?}", user.email, query.date);

    let booking_service = BookingService::new(&state.config);
    let bookings = booking_service
        .bookings_for(&query.email, query.date.as_deref())
        .await?;

    Ok(Json(json!({
        "success": true,
        "result": bookings
    })))
}

/// Single booking by id; JSON `null` when there is none.
#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<String>,
) -> Result<Json<Option<Booking>>, AppError> {
    let booking_service = BookingService::new(&state.config);
    let booking = booking_service.get_booking(&id).await?;

    Ok(Json(booking))
}
