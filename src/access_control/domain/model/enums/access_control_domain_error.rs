use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum AccessControlDomainError {
    #[error("Token mismatch: User ID does not match request data.")]
    IdentityMismatch,
}
