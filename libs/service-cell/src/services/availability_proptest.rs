use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::subsequence;

use shared_models::documents::{Booking, Service};

use crate::services::availability::compute_availability;

const DATE: &str = "2024-01-01";

fn slot_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[0-9]{1,2}(am|pm)", 0..12)
        .prop_map(|labels| labels.into_iter().collect::<Vec<_>>())
}

// A service plus a random subset of its slots booked on DATE.
fn service_with_bookings() -> impl Strategy<Value = (Service, Vec<Booking>)> {
    ("[A-Z][a-z]{2,8}", slot_labels()).prop_flat_map(|(name, slots)| {
        let len = slots.len();
        let service = Service {
            name: name.clone(),
            slots: slots.clone(),
            price: None,
            extra: Default::default(),
        };
        subsequence(slots, 0..=len).prop_map(move |booked| {
            let bookings = booked
                .iter()
                .map(|slot| Booking::new("p@x.com", &name, DATE, slot))
                .collect::<Vec<_>>();
            (service.clone(), bookings)
        })
    })
}

proptest! {
    #[test]
    fn test_available_is_ordered_subset_without_duplicates((service, bookings) in service_with_bookings()) {
        let result = compute_availability(std::slice::from_ref(&service), &bookings, DATE);
        let available = &result[0].available_slots;

        // Order-preserving subsequence of the service's slots.
        let mut remaining = service.slots.iter();
        for slot in available {
            prop_assert!(remaining.any(|candidate| candidate == slot));
        }

        let unique: HashSet<&String> = available.iter().collect();
        prop_assert_eq!(unique.len(), available.len());

        let booked: HashSet<&str> = bookings.iter().map(|b| b.time_slot.as_str()).collect();
        prop_assert_eq!(available.len(), service.slots.len() - booked.len());
        for slot in available {
            prop_assert!(!booked.contains(slot.as_str()));
        }
    }

    #[test]
    fn test_unrelated_bookings_leave_slots_untouched((service, bookings) in service_with_bookings()) {
        let other: Vec<Booking> = bookings
            .iter()
            .map(|b| Booking::new(&b.email, &format!("{}-other", b.service), DATE, &b.time_slot))
            .collect();

        let result = compute_availability(std::slice::from_ref(&service), &other, DATE);
        prop_assert_eq!(&result[0].available_slots, &service.slots);
    }

    #[test]
    fn test_fully_booked_leaves_nothing((service, _) in service_with_bookings()) {
        let all: Vec<Booking> = service
            .slots
            .iter()
            .map(|slot| Booking::new("p@x.com", &service.name, DATE, slot))
            .collect();

        let result = compute_availability(std::slice::from_ref(&service), &all, DATE);
        prop_assert!(result[0].available_slots.is_empty());
    }

    #[test]
    fn test_same_inputs_same_output((service, bookings) in service_with_bookings()) {
        let catalog = vec![service];
        let first = compute_availability(&catalog, &bookings, DATE);
        let second = compute_availability(&catalog, &bookings, DATE);
        prop_assert_eq!(first, second);
    }
}
