use async_trait::async_trait;

use crate::document_store::domain::model::{
    entities::document::{Document, DocumentValue},
    enums::document_store_error::DocumentStoreError,
    value_objects::{collection_name::CollectionName, document_key::DocumentKey},
};

#[async_trait]
pub trait DocumentStoreRepository: Send + Sync {
    /// Creates a new document under a store-assigned key. Never overwrites.
    async fn append(
        &self,
        collection: &CollectionName,
        document: Document,
    ) -> Result<DocumentKey, DocumentStoreError>;

    /// Creates or fully replaces the document at `key`. Fields absent from `document` are dropped.
    async fn upsert(
        &self,
        collection: &CollectionName,
        key: &DocumentKey,
        document: Document,
    ) -> Result<(), DocumentStoreError>;

    fn server_timestamp(&self) -> DocumentValue {
        DocumentValue::ServerTimestamp
    }

    fn is_available(&self) -> bool {
        true
    }
}
