use async_trait::async_trait;

use crate::document_store::{
    domain::model::{
        entities::document::Document,
        enums::document_store_error::DocumentStoreError,
        value_objects::{collection_name::CollectionName, document_key::DocumentKey},
    },
    infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
};

/// Stands in for a store whose initialisation failed at startup; every write fails.
pub struct UnavailableDocumentStoreRepositoryImpl {
    reason: String,
}

impl UnavailableDocumentStoreRepositoryImpl {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DocumentStoreRepository for UnavailableDocumentStoreRepositoryImpl {
    async fn append(
        &self,
        _collection: &CollectionName,
        _document: Document,
    ) -> Result<DocumentKey, DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(self.reason.clone()))
    }

    async fn upsert(
        &self,
        _collection: &CollectionName,
        _key: &DocumentKey,
        _document: Document,
    ) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(self.reason.clone()))
    }

    fn is_available(&self) -> bool {
        false
    }
}
