use serde::Serialize;

use shared_database::UpdateResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub result: UpdateResult,
    pub access_token: String,
}
