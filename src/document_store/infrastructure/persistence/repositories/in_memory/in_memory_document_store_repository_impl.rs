use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::document_store::{
    domain::model::{
        entities::document::{Document, DocumentValue},
        enums::document_store_error::DocumentStoreError,
        value_objects::{collection_name::CollectionName, document_key::DocumentKey},
    },
    infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
};

type Collection = BTreeMap<DocumentKey, Document>;

/// Process-local store for development and tests. Server timestamps come from a clock
/// that never moves backwards, so later commits never carry an earlier timestamp.
#[derive(Default)]
pub struct InMemoryDocumentStoreRepositoryImpl {
    collections: RwLock<HashMap<CollectionName, Collection>>,
    last_commit_time: Mutex<Option<DateTime<Utc>>>,
}

impl InMemoryDocumentStoreRepositoryImpl {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, collection: &str, key: &str) -> Option<Document> {
        let collection = CollectionName::new(collection).ok()?;
        let key = DocumentKey::new(key).ok()?;
        let guard = self.collections.read().await;
        guard.get(&collection)?.get(&key).cloned()
    }

    pub async fn list(&self, collection: &str) -> Vec<(DocumentKey, Document)> {
        let Ok(collection) = CollectionName::new(collection) else {
            return Vec::new();
        };
        let guard = self.collections.read().await;
        guard
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .map(|(key, document)| (key.clone(), document.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    async fn commit_time(&self) -> DateTime<Utc> {
        let mut guard = self.last_commit_time.lock().await;
        let now = Utc::now();
        let commit_time = match *guard {
            Some(previous) if previous > now => previous,
            _ => now,
        };
        *guard = Some(commit_time);
        commit_time
    }

    async fn resolve(&self, document: Document) -> Document {
        let needs_clock = document
            .fields()
            .values()
            .any(|value| matches!(value, DocumentValue::ServerTimestamp));
        if !needs_clock {
            return document;
        }

        let commit_time = self.commit_time().await;
        document
            .into_fields()
            .into_iter()
            .fold(Document::new(), |resolved, (name, value)| match value {
                DocumentValue::ServerTimestamp => {
                    resolved.with_field(name, DocumentValue::Timestamp(commit_time))
                }
                other => resolved.with_field(name, other),
            })
    }
}

#[async_trait]
impl DocumentStoreRepository for InMemoryDocumentStoreRepositoryImpl {
    async fn append(
        &self,
        collection: &CollectionName,
        document: Document,
    ) -> Result<DocumentKey, DocumentStoreError> {
        // Resolve under the write lock so commits land in timestamp order.
        let mut guard = self.collections.write().await;
        let document = self.resolve(document).await;
        let documents = guard.entry(collection.clone()).or_default();

        let mut key = DocumentKey::generate();
        while documents.contains_key(&key) {
            key = DocumentKey::generate();
        }
        documents.insert(key.clone(), document);

        Ok(key)
    }

    async fn upsert(
        &self,
        collection: &CollectionName,
        key: &DocumentKey,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        // Resolve under the write lock so commits land in timestamp order.
        let mut guard = self.collections.write().await;
        let document = self.resolve(document).await;
        guard
            .entry(collection.clone())
            .or_default()
            .insert(key.clone(), document);

        Ok(())
    }
}
