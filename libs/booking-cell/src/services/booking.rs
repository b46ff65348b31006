use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::{Collection, StoreClient, StoreError};
use shared_models::documents::Booking;

use crate::models::BookingOutcome;

pub struct BookingService {
    store: StoreClient,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    /// Stores `request` unless the patient already booked this service on this date.
    ///
    /// Two patients racing for the same slot are separated by the store's
    /// unique constraint on (service, bookingDate, timeSlot), which surfaces
    /// here as [`StoreError::Conflict`].
    pub async fn create_booking(&self, request: Booking) -> Result<BookingOutcome, StoreError> {
        let existing: Option<Booking> = self
            .store
            .find_one(
                Collection::Bookings,
                &[
                    ("email", request.email.as_str()),
                    ("service", request.service.as_str()),
                    ("bookingDate", request.booking_date.as_str()),
                ],
            )
            .await?;

        if let Some(existing) = existing {
            debug!(
                "{} already booked {} on {}",
                existing.email, existing.service, existing.booking_date
            );
            return Ok(BookingOutcome::AlreadyBooked(existing));
        }

        let created: Booking = self.store.insert(Collection::Bookings, &request).await?;
        info!(
            "Booking created for {}: {} at {} on {}",
            created.email, created.service, created.time_slot, created.booking_date
        );

        Ok(BookingOutcome::Created(created))
    }

    /// Bookings of `email`, restricted to `date` when one is given.
    pub async fn bookings_for(&self, email: &str, date: Option<&str>) -> Result<Vec<Booking>, StoreError> {
        let mut filters = vec![("email", email)];
        if let Some(date) = date {
            filters.push(("bookingDate", date));
        }

        self.store.find(Collection::Bookings, &filters).await
    }

    pub async fn get_booking(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        self.store.find_one(Collection::Bookings, &[("id", id)]).await
    }
}
