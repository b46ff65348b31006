use serde::{Deserialize, Serialize};

use shared_models::documents::Service;

/// A catalog entry together with the slots still open on the queried date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableService {
    #[serde(flatten)]
    pub service: Service,
    pub available_slots: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}
