use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Error)]
pub enum ServiceAccountKeyError {
    #[error("no service account key configured (set FIREBASE_ADMIN_KEY_PATH or provide admin-key.json)")]
    NotConfigured,

    #[error("service account key {path} could not be read: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("service account key {path} is not valid: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// The subset of a Google service-account JSON file used by the gateway.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn load(path: Option<&Path>) -> Result<Self, ServiceAccountKeyError> {
        let path = path.ok_or(ServiceAccountKeyError::NotConfigured)?;

        let raw = std::fs::read_to_string(path).map_err(|e| ServiceAccountKeyError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&raw).map_err(|reason| ServiceAccountKeyError::Invalid {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        let key: Self = serde_json::from_str(raw).map_err(|e| e.to_string())?;

        if key.project_id.trim().is_empty() {
            return Err("project_id is empty".to_string());
        }
        if key.client_email.trim().is_empty() {
            return Err("client_email is empty".to_string());
        }
        if !key.private_key.contains("PRIVATE KEY") {
            return Err("private_key is not a PEM encoded key".to_string());
        }

        Ok(key)
    }
}
