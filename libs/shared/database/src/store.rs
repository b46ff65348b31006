use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::StoreError;

const RETURN_REPRESENTATION: &str = "return=representation";
const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=representation";

/// Collections exposed by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Services,
    Bookings,
    Users,
    AddedDoctors,
}

impl Collection {
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Services => "services",
            Collection::Bookings => "bookings",
            Collection::Users => "users",
            Collection::AddedDoctors => "added_doctors",
        }
    }

    fn path(&self) -> String {
        format!("/rest/v1/{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub modified_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: usize,
}

/// REST client for the external document store.
///
/// Filters are equality matches, sent as `field=eq.value` query pairs.
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

fn eq_filters(filters: &[(&str, &str)]) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(field, value)| (field.to_string(), format!("eq.{}", value)))
        .collect()
}

impl StoreClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.store_url.trim_end_matches('/').to_string(),
            api_key: config.store_api_key.clone(),
        }
    }

    fn builder(&self, method: Method, collection: Collection) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, collection.path());
        debug!("Making {} request to {}", method, url);

        self.client
            .request(method, &url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send<T>(&self, req: RequestBuilder) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let response = req.send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("Store error ({}): {}", status, text);

            return Err(match status {
                StatusCode::CONFLICT => StoreError::Conflict(text),
                _ => StoreError::Status { status, body: text },
            });
        }

        let data = serde_json::from_str::<T>(&text)?;
        Ok(data)
    }

    /// Every document of `collection` matching all `filters`.
    pub async fn find<T>(&self, collection: Collection, filters: &[(&str, &str)]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let req = self.builder(Method::GET, collection).query(&eq_filters(filters));
        self.send(req).await
    }

    /// Like [`find`](Self::find), returning only the `select` fields (comma separated).
    pub async fn find_projected(
        &self,
        collection: Collection,
        filters: &[(&str, &str)],
        select: &str,
    ) -> Result<Vec<Value>, StoreError> {
        let req = self
            .builder(Method::GET, collection)
            .query(&eq_filters(filters))
            .query(&[("select", select)]);
        self.send(req).await
    }

    pub async fn find_one<T>(&self, collection: Collection, filters: &[(&str, &str)]) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let req = self
            .builder(Method::GET, collection)
            .query(&eq_filters(filters))
            .query(&[("limit", "1")]);

        let mut found: Vec<T> = self.send(req).await?;
        if found.is_empty() {
            return Ok(None);
        }
        Ok(Some(found.swap_remove(0)))
    }

    /// Inserts one document and returns it as stored.
    ///
    /// A unique constraint violation surfaces as [`StoreError::Conflict`].
    pub async fn insert<D, T>(&self, collection: Collection, document: &D) -> Result<T, StoreError>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self
            .builder(Method::POST, collection)
            .header("Prefer", RETURN_REPRESENTATION)
            .json(document);

        let mut created: Vec<T> = self.send(req).await?;
        if created.is_empty() {
            return Err(StoreError::Status {
                status: StatusCode::NO_CONTENT,
                body: format!("insert into {} returned no document", collection.name()),
            });
        }
        Ok(created.swap_remove(0))
    }

    /// Inserts `document`, or merges it into the existing document sharing `key`.
    pub async fn upsert(&self, collection: Collection, key: &str, document: &Value) -> Result<UpdateResult, StoreError> {
        let req = self
            .builder(Method::POST, collection)
            .query(&[("on_conflict", key)])
            .header("Prefer", MERGE_DUPLICATES)
            .json(document);

        let written: Vec<Value> = self.send(req).await?;
        Ok(UpdateResult {
            acknowledged: true,
            modified_count: written.len(),
        })
    }

    pub async fn delete(&self, collection: Collection, filters: &[(&str, &str)]) -> Result<DeleteResult, StoreError> {
        let req = self
            .builder(Method::DELETE, collection)
            .query(&eq_filters(filters))
            .header("Prefer", RETURN_REPRESENTATION);

        let removed: Vec<Value> = self.send(req).await?;
        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: removed.len(),
        })
    }
}
