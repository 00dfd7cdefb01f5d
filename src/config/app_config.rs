use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::warn;

pub const DEFAULT_ADMIN_KEY_FILE: &str = "admin-key.json";
pub const DEFAULT_FIREBASE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
pub const DEFAULT_CORS_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3001",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentStoreBackend {
    Firestore,
    Memory,
}

impl DocumentStoreBackend {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "firestore" => Some(Self::Firestore),
            "memory" | "in-memory" | "in_memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub firebase_admin_key_path: Option<PathBuf>,
    pub firebase_project_id: Option<String>,
    pub document_store_backend: DocumentStoreBackend,
    pub firestore_emulator_host: Option<String>,
    pub firebase_jwks_url: String,
    pub token_verification_cache_ttl: Duration,
    pub live_tracking_retention: Option<Duration>,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), Path::new(DEFAULT_ADMIN_KEY_FILE))
    }

    /// Builds the configuration from an arbitrary variable source. `fallback_key_file`
    /// is used when `FIREBASE_ADMIN_KEY_PATH` is unset and the file exists.
    pub fn from_lookup<F>(lookup: F, fallback_key_file: &Path) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            port: non_empty("PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(8000),
            firebase_admin_key_path: resolve_admin_key_path(
                non_empty("FIREBASE_ADMIN_KEY_PATH"),
                fallback_key_file,
            ),
            firebase_project_id: non_empty("FIREBASE_PROJECT_ID"),
            document_store_backend: non_empty("DOCUMENT_STORE_BACKEND")
                .map(|value| {
                    DocumentStoreBackend::parse(&value).unwrap_or_else(|| {
                        warn!(value = %value, "unrecognised DOCUMENT_STORE_BACKEND, using firestore");
                        DocumentStoreBackend::Firestore
                    })
                })
                .unwrap_or(DocumentStoreBackend::Firestore),
            firestore_emulator_host: non_empty("FIRESTORE_EMULATOR_HOST"),
            firebase_jwks_url: non_empty("FIREBASE_JWKS_URL")
                .unwrap_or_else(|| DEFAULT_FIREBASE_JWKS_URL.to_string()),
            token_verification_cache_ttl: Duration::from_secs(
                non_empty("TOKEN_VERIFICATION_CACHE_TTL_SECONDS")
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(0),
            ),
            live_tracking_retention: non_empty("LIVE_TRACKING_RETENTION_SECONDS")
                .and_then(|value| value.parse::<u64>().ok())
                .filter(|seconds| *seconds > 0)
                .map(Duration::from_secs),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_else(|| {
                    DEFAULT_CORS_ALLOWED_ORIGINS
                        .iter()
                        .map(|origin| origin.to_string())
                        .collect()
                }),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn resolve_admin_key_path(configured: Option<String>, fallback: &Path) -> Option<PathBuf> {
    match configured {
        Some(path) => Some(PathBuf::from(path)),
        None if fallback.exists() => Some(fallback.to_path_buf()),
        None => None,
    }
}
