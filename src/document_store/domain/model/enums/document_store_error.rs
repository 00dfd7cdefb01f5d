use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DocumentStoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    #[error("document write failed: {0}")]
    WriteFailure(String),
}
