use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    config::{
        app_config::{AppConfig, DocumentStoreBackend},
        service_account_key::ServiceAccountKey,
    },
    document_store::{
        domain::model::enums::document_store_error::DocumentStoreError,
        infrastructure::persistence::repositories::{
            document_store_repository::DocumentStoreRepository,
            firestore::{
                firestore_document_store_repository_impl::{
                    FirestoreDocumentStoreRepositoryImpl, FirestoreSettings,
                },
                service_account_access_token_provider::{
                    AccessTokenProvider, ServiceAccountAccessTokenProvider,
                    StaticAccessTokenProvider,
                },
            },
            in_memory::in_memory_document_store_repository_impl::InMemoryDocumentStoreRepositoryImpl,
            unavailable_document_store_repository_impl::UnavailableDocumentStoreRepositoryImpl,
        },
    },
};

pub mod domain;
pub mod infrastructure;

const EMULATOR_ACCESS_TOKEN: &str = "owner";

/// Never fails: when the configured backend cannot be initialised the process still starts
/// and store-dependent requests fail individually.
pub fn build_document_store_repository(
    config: &AppConfig,
    client: reqwest::Client,
    service_account: Option<&ServiceAccountKey>,
) -> Arc<dyn DocumentStoreRepository> {
    match config.document_store_backend {
        DocumentStoreBackend::Memory => {
            warn!("using in-memory document store; data is lost on restart");
            Arc::new(InMemoryDocumentStoreRepositoryImpl::new())
        }
        DocumentStoreBackend::Firestore => {
            match build_firestore_repository(config, client, service_account) {
                Ok(repository) => Arc::new(repository),
                Err(e) => {
                    error!(error = %e, "document store initialisation failed; store-backed routes are disabled");
                    Arc::new(UnavailableDocumentStoreRepositoryImpl::new(e.to_string()))
                }
            }
        }
    }
}

fn build_firestore_repository(
    config: &AppConfig,
    client: reqwest::Client,
    service_account: Option<&ServiceAccountKey>,
) -> Result<FirestoreDocumentStoreRepositoryImpl, DocumentStoreError> {
    let project_id = config
        .firebase_project_id
        .clone()
        .or_else(|| service_account.map(|key| key.project_id.clone()))
        .ok_or_else(|| DocumentStoreError::Unavailable("no project id configured".to_string()))?;

    if let Some(emulator_host) = config.firestore_emulator_host.as_deref() {
        info!(emulator_host, project_id = %project_id, "document store using emulator");
        let token_provider: Arc<dyn AccessTokenProvider> =
            Arc::new(StaticAccessTokenProvider::new(EMULATOR_ACCESS_TOKEN));
        return Ok(FirestoreDocumentStoreRepositoryImpl::new(
            client,
            FirestoreSettings::for_emulator(emulator_host, project_id),
            token_provider,
        ));
    }

    let key = service_account.ok_or_else(|| {
        DocumentStoreError::Unavailable("service account credentials are missing".to_string())
    })?;
    let token_provider: Arc<dyn AccessTokenProvider> =
        Arc::new(ServiceAccountAccessTokenProvider::new(client.clone(), key)?);

    info!(project_id = %project_id, "document store connected to firestore");
    Ok(FirestoreDocumentStoreRepositoryImpl::new(
        client,
        FirestoreSettings::new(project_id),
        token_provider,
    ))
}
