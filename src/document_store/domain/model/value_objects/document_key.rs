use rand::{Rng, distributions::Alphanumeric};

use crate::document_store::domain::model::enums::document_store_error::DocumentStoreError;

const AUTO_ID_LENGTH: usize = 20;
const MAX_KEY_BYTES: usize = 1500;

/// Identifier of a single document inside a collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DocumentKey(String);

impl DocumentKey {
    pub fn new(value: impl Into<String>) -> Result<Self, DocumentStoreError> {
        let value = value.into();
        if !is_valid_path_segment(&value) {
            return Err(DocumentStoreError::WriteFailure(format!(
                "invalid document key {value:?}"
            )));
        }
        Ok(Self(value))
    }

    /// Store-style auto id: 20 random alphanumeric characters.
    pub fn generate() -> Self {
        let value = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(AUTO_ID_LENGTH)
            .map(char::from)
            .collect();
        Self(value)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Shared by collection names and document keys: one non-empty path segment.
pub fn is_valid_path_segment(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_KEY_BYTES
        && !value.contains('/')
        && value != "."
        && value != ".."
}
