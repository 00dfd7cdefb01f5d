use crate::document_store::domain::model::{
    enums::document_store_error::DocumentStoreError,
    value_objects::document_key::is_valid_path_segment,
};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CollectionName(String);

impl CollectionName {
    pub fn new(value: impl Into<String>) -> Result<Self, DocumentStoreError> {
        let value = value.into();
        if !is_valid_path_segment(&value) {
            return Err(DocumentStoreError::WriteFailure(format!(
                "invalid collection name {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CollectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
