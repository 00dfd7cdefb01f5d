use thiserror::Error;

use crate::{
    access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError,
    document_store::domain::model::enums::document_store_error::DocumentStoreError,
};

#[derive(Debug, Error)]
pub enum RideBookingDomainError {
    #[error(transparent)]
    AccessDenied(#[from] AccessControlDomainError),

    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}
