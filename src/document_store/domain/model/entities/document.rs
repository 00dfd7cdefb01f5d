use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub enum DocumentValue {
    String(String),
    Double(f64),
    Timestamp(DateTime<Utc>),
    /// Placeholder resolved to the store's clock when the write commits.
    ServerTimestamp,
}

impl DocumentValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

/// Complete field set of one document. Writes replace the stored fields wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    fields: BTreeMap<String, DocumentValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: DocumentValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn with_string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_field(name, DocumentValue::String(value.into()))
    }

    pub fn with_double(self, name: impl Into<String>, value: f64) -> Self {
        self.with_field(name, DocumentValue::Double(value))
    }

    pub fn get(&self, name: &str) -> Option<&DocumentValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, DocumentValue> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, DocumentValue> {
        self.fields
    }
}
