use serde::{Deserialize, Serialize};

/// Body of the role management endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetUserRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatus {
    pub is_admin: bool,
}
