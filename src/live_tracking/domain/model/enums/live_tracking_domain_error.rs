use thiserror::Error;

use crate::document_store::domain::model::enums::document_store_error::DocumentStoreError;

#[derive(Debug, Error)]
pub enum LiveTrackingDomainError {
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}
