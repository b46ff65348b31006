use serde_json::{Map, Value};
use tracing::info;

use shared_config::AppConfig;
use shared_database::{Collection, InsertResult, StoreClient, StoreError};

pub struct DoctorService {
    store: StoreClient,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    /// Stores the submitted doctor document as-is.
    pub async fn add_doctor(&self, doctor: Map<String, Value>) -> Result<InsertResult, StoreError> {
        let created: Value = self.store.insert(Collection::AddedDoctors, &doctor).await?;
        let inserted_id = created.get("id").cloned();

        info!("Doctor added with id {:?}", inserted_id);
        Ok(InsertResult {
            acknowledged: true,
            inserted_id,
        })
    }
}
