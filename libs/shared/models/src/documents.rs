use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ROLE_ADMIN: &str = "admin";

/// A bookable offering from the `services` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Service {
    pub fn new(name: &str, slots: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            slots: slots.iter().map(|slot| slot.to_string()).collect(),
            price: None,
            extra: Map::new(),
        }
    }
}

/// A booking document. Fields the client submits beyond the four below
/// (patient name, phone, price...) are stored untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub email: String,
    pub service: String,
    pub booking_date: String,
    pub time_slot: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Booking {
    pub fn new(email: &str, service: &str, booking_date: &str, time_slot: &str) -> Self {
        Self {
            email: email.to_string(),
            service: service.to_string(),
            booking_date: booking_date.to_string(),
            time_slot: time_slot.to_string(),
            extra: Map::new(),
        }
    }
}

/// A user document keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }
}
