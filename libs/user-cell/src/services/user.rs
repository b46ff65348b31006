use serde_json::{Map, Value};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::{Collection, DeleteResult, StoreClient, StoreError, UpdateResult};
use shared_models::documents::{UserRecord, ROLE_ADMIN};

pub struct UserService {
    store: StoreClient,
}

impl UserService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.store.find(Collection::Users, &[]).await
    }

    pub async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        self.store.find_one(Collection::Users, &[("email", email)]).await
    }

    pub async fn is_admin(&self, email: &str) -> Result<bool, StoreError> {
        let user = self.find_user(email).await?;
        Ok(user.map(|user| user.is_admin()).unwrap_or(false))
    }

    /// Creates or updates the user keyed by `email` with the submitted profile fields.
    pub async fn upsert_profile(&self, email: &str, profile: Map<String, Value>) -> Result<UpdateResult, StoreError> {
        let mut document = profile;
        document.insert("email".to_string(), Value::String(email.to_string()));

        debug!("Upserting profile for {}", email);
        self.store
            .upsert(Collection::Users, "email", &Value::Object(document))
            .await
    }

    pub async fn set_role(&self, email: &str, role: &str) -> Result<UpdateResult, StoreError> {
        let mut document = Map::new();
        document.insert("email".to_string(), Value::String(email.to_string()));
        document.insert("role".to_string(), Value::String(role.to_string()));

        info!("Setting role of {} to {}", email, role);
        self.store
            .upsert(Collection::Users, "email", &Value::Object(document))
            .await
    }

    pub async fn promote_to_admin(&self, email: &str) -> Result<UpdateResult, StoreError> {
        self.set_role(email, ROLE_ADMIN).await
    }

    /// Removes the whole user document, profile fields included.
    pub async fn delete_user(&self, email: &str) -> Result<DeleteResult, StoreError> {
        info!("Deleting user {}", email);
        self.store.delete(Collection::Users, &[("email", email)]).await
    }
}
