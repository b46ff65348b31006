use std::collections::{HashMap, HashSet};

use tracing::debug;

use shared_config::AppConfig;
use shared_database::{Collection, StoreClient, StoreError};
use shared_models::documents::{Booking, Service};

use crate::models::AvailableService;

/// Annotates every service of `catalog` with the slots not yet booked on `date`.
///
/// Slot order follows `service.slots`. Bookings on another date or for a
/// service missing from the catalog are ignored.
pub fn compute_availability(catalog: &[Service], bookings: &[Booking], date: &str) -> Vec<AvailableService> {
    let mut booked: HashMap<&str, HashSet<&str>> = HashMap::new();
    for booking in bookings.iter().filter(|booking| booking.booking_date == date) {
        booked
            .entry(booking.service.as_str())
            .or_default()
            .insert(booking.time_slot.as_str());
    }

    catalog
        .iter()
        .map(|service| {
            let taken = booked.get(service.name.as_str());
            let available_slots = service
                .slots
                .iter()
                .filter(|slot| taken.map_or(true, |taken| !taken.contains(slot.as_str())))
                .cloned()
                .collect();

            AvailableService {
                service: service.clone(),
                available_slots,
            }
        })
        .collect()
}

pub struct AvailabilityService {
    store: StoreClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    /// Loads the catalog and the bookings of `date`, then computes open slots.
    pub async fn available_on(&self, date: &str) -> Result<Vec<AvailableService>, StoreError> {
        let catalog: Vec<Service> = self.store.find(Collection::Services, &[]).await?;
        let bookings: Vec<Booking> = self
            .store
            .find(Collection::Bookings, &[("bookingDate", date)])
            .await?;

        debug!(
            "Computing availability on {} for {} services and {} bookings",
            date,
            catalog.len(),
            bookings.len()
        );

        Ok(compute_availability(&catalog, &bookings, date))
    }
}
