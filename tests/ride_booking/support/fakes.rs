use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use kidtrack_gateway::{
    document_store::{
        domain::model::{
            entities::document::Document,
            enums::document_store_error::DocumentStoreError,
            value_objects::{collection_name::CollectionName, document_key::DocumentKey},
        },
        infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
    },
    iam_integration::domain::{
        model::{
            enums::authentication_error::AuthenticationError,
            value_objects::authenticated_user_id::AuthenticatedUserId,
        },
        services::token_verification_service::TokenVerificationService,
    },
};

/// Maps raw bearer tokens to subjects; any other token is rejected as invalid.
pub struct FakeTokenVerificationService {
    subjects_by_token: HashMap<String, String>,
    calls: Mutex<usize>,
}

impl FakeTokenVerificationService {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            subjects_by_token: pairs
                .iter()
                .map(|(token, subject)| (token.to_string(), subject.to_string()))
                .collect(),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("mutex poisoned")
    }
}

#[async_trait]
impl TokenVerificationService for FakeTokenVerificationService {
    async fn verify(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedUserId, AuthenticationError> {
        *self.calls.lock().expect("mutex poisoned") += 1;

        let authorization = authorization.ok_or(AuthenticationError::MissingCredential)?;
        let token = authorization
            .strip_prefix("Bearer ")
            .ok_or(AuthenticationError::UnsupportedScheme)?;
        let subject = self
            .subjects_by_token
            .get(token)
            .ok_or(AuthenticationError::InvalidOrExpiredToken)?;

        AuthenticatedUserId::new(subject).map_err(|_| AuthenticationError::InvalidOrExpiredToken)
    }
}

/// Fails every write with the configured error.
pub struct FailingDocumentStore {
    error: DocumentStoreError,
}

impl FailingDocumentStore {
    pub fn new(error: DocumentStoreError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl DocumentStoreRepository for FailingDocumentStore {
    async fn append(
        &self,
        _collection: &CollectionName,
        _document: Document,
    ) -> Result<DocumentKey, DocumentStoreError> {
        Err(self.error.clone())
    }

    async fn upsert(
        &self,
        _collection: &CollectionName,
        _key: &DocumentKey,
        _document: Document,
    ) -> Result<(), DocumentStoreError> {
        Err(self.error.clone())
    }
}
