use serde_json::Value;

use shared_config::AppConfig;
use shared_database::{Collection, StoreClient, StoreError};
use shared_models::documents::Service;

pub struct CatalogService {
    store: StoreClient,
}

impl CatalogService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    pub async fn list_services(&self) -> Result<Vec<Service>, StoreError> {
        self.store.find(Collection::Services, &[]).await
    }

    /// Catalog projected to `id` and `name` only.
    pub async fn list_service_names(&self) -> Result<Vec<Value>, StoreError> {
        self.store
            .find_projected(Collection::Services, &[], "id,name")
            .await
    }
}
