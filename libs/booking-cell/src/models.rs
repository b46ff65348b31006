use std::sync::Arc;

use serde::Deserialize;

use notification_cell::NotificationQueue;
use shared_config::AppConfig;
use shared_models::documents::Booking;

/// Router state: config plus the queue confirmation emails go through.
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub notifier: NotificationQueue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Created(Booking),
    /// Same patient already holds a booking for this service on this date.
    AlreadyBooked(Booking),
}

#[derive(Debug, Deserialize)]
pub struct AppointmentQuery {
    pub email: String,
    pub date: Option<String>,
}
