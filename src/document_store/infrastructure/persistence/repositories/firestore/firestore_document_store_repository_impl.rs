use std::sync::Arc;

use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::StatusCode;
use serde_json::{Map, Value, json};
use tracing::{debug, error};

use crate::document_store::{
    domain::model::{
        entities::document::{Document, DocumentValue},
        enums::document_store_error::DocumentStoreError,
        value_objects::{collection_name::CollectionName, document_key::DocumentKey},
    },
    infrastructure::persistence::repositories::{
        document_store_repository::DocumentStoreRepository,
        firestore::service_account_access_token_provider::AccessTokenProvider,
    },
};

pub const FIRESTORE_API_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE_ID: &str = "(default)";

#[derive(Clone, Debug)]
pub struct FirestoreSettings {
    pub base_url: String,
    pub project_id: String,
    pub database_id: String,
}

impl FirestoreSettings {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            base_url: FIRESTORE_API_BASE_URL.to_string(),
            project_id: project_id.into(),
            database_id: DEFAULT_DATABASE_ID.to_string(),
        }
    }

    pub fn for_emulator(emulator_host: &str, project_id: impl Into<String>) -> Self {
        Self {
            base_url: format!("http://{}/v1", emulator_host.trim_end_matches('/')),
            ..Self::new(project_id)
        }
    }

    fn database_path(&self) -> String {
        format!(
            "projects/{}/databases/{}",
            self.project_id, self.database_id
        )
    }
}

/// Writes through the Firestore REST `documents:commit` endpoint.
pub struct FirestoreDocumentStoreRepositoryImpl {
    client: reqwest::Client,
    settings: FirestoreSettings,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl FirestoreDocumentStoreRepositoryImpl {
    pub fn new(
        client: reqwest::Client,
        settings: FirestoreSettings,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            client,
            settings,
            token_provider,
        }
    }

    fn document_name(&self, collection: &CollectionName, key: &DocumentKey) -> String {
        format!(
            "{}/documents/{}/{}",
            self.settings.database_path(),
            collection.value(),
            key.value()
        )
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/{}/documents:commit",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.database_path()
        )
    }

    fn build_write(&self, name: String, document: Document, must_not_exist: bool) -> Value {
        let (fields, transforms) = encode_document(document);

        let mut write = Map::new();
        write.insert("update".to_string(), json!({ "name": name, "fields": fields }));
        if !transforms.is_empty() {
            write.insert("updateTransforms".to_string(), Value::Array(transforms));
        }
        if must_not_exist {
            write.insert("currentDocument".to_string(), json!({ "exists": false }));
        }
        Value::Object(write)
    }

    async fn commit(&self, write: Value) -> Result<(), DocumentStoreError> {
        let access_token = self.token_provider.access_token().await?;

        let response = self
            .client
            .post(self.commit_url())
            .bearer_auth(access_token)
            .json(&json!({ "writes": [write] }))
            .send()
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!(%status, %body, "document commit rejected");

        if status == StatusCode::SERVICE_UNAVAILABLE {
            Err(DocumentStoreError::Unavailable(format!(
                "commit returned {status}"
            )))
        } else {
            Err(DocumentStoreError::WriteFailure(format!(
                "commit returned {status}"
            )))
        }
    }
}

#[async_trait]
impl DocumentStoreRepository for FirestoreDocumentStoreRepositoryImpl {
    async fn append(
        &self,
        collection: &CollectionName,
        document: Document,
    ) -> Result<DocumentKey, DocumentStoreError> {
        let key = DocumentKey::generate();
        let write = self.build_write(self.document_name(collection, &key), document, true);
        self.commit(write).await?;

        debug!(collection = collection.value(), key = key.value(), "document appended");
        Ok(key)
    }

    async fn upsert(
        &self,
        collection: &CollectionName,
        key: &DocumentKey,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        // No update mask: the stored document is replaced by exactly these fields.
        let write = self.build_write(self.document_name(collection, key), document, false);
        self.commit(write).await?;

        debug!(collection = collection.value(), key = key.value(), "document upserted");
        Ok(())
    }
}

fn encode_document(document: Document) -> (Map<String, Value>, Vec<Value>) {
    let mut fields = Map::new();
    let mut transforms = Vec::new();

    for (name, value) in document.into_fields() {
        match value {
            DocumentValue::String(text) => {
                fields.insert(name, json!({ "stringValue": text }));
            }
            DocumentValue::Double(number) => {
                fields.insert(name, json!({ "doubleValue": number }));
            }
            DocumentValue::Timestamp(instant) => {
                fields.insert(
                    name,
                    json!({
                        "timestampValue": instant.to_rfc3339_opts(SecondsFormat::Micros, true)
                    }),
                );
            }
            DocumentValue::ServerTimestamp => {
                transforms.push(json!({
                    "fieldPath": name,
                    "setToServerValue": "REQUEST_TIME"
                }));
            }
        }
    }

    (fields, transforms)
}
