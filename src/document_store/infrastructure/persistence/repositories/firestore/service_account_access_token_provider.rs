use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    config::service_account_key::ServiceAccountKey,
    document_store::domain::model::enums::document_store_error::DocumentStoreError,
};

const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECONDS: i64 = 3600;
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String, DocumentStoreError>;
}

/// Fixed credential, used against the local emulator which accepts `Bearer owner`.
pub struct StaticAccessTokenProvider {
    token: String,
}

impl StaticAccessTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessTokenProvider {
    async fn access_token(&self) -> Result<String, DocumentStoreError> {
        Ok(self.token.clone())
    }
}

#[derive(Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenExchangeResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedAccessToken {
    token: String,
    refresh_after: Instant,
}

/// OAuth2 JWT-bearer grant signed with the service-account private key.
pub struct ServiceAccountAccessTokenProvider {
    client: reqwest::Client,
    client_email: String,
    token_uri: String,
    encoding_key: EncodingKey,
    cached: Mutex<Option<CachedAccessToken>>,
}

impl ServiceAccountAccessTokenProvider {
    pub fn new(
        client: reqwest::Client,
        key: &ServiceAccountKey,
    ) -> Result<Self, DocumentStoreError> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| DocumentStoreError::Unavailable(format!("invalid private key: {e}")))?;

        Ok(Self {
            client,
            client_email: key.client_email.clone(),
            token_uri: key.token_uri.clone(),
            encoding_key,
            cached: Mutex::new(None),
        })
    }

    fn signed_assertion(&self) -> Result<String, DocumentStoreError> {
        let iat = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: DATASTORE_SCOPE,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECONDS,
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| DocumentStoreError::Unavailable(format!("assertion signing failed: {e}")))
    }

    async fn exchange(&self) -> Result<TokenExchangeResponse, DocumentStoreError> {
        let assertion = self.signed_assertion()?;
        let response = self
            .client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocumentStoreError::Unavailable(format!(
                "token exchange failed with status {status}: {body}"
            )));
        }

        response
            .json::<TokenExchangeResponse>()
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountAccessTokenProvider {
    async fn access_token(&self) -> Result<String, DocumentStoreError> {
        let mut guard = self.cached.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.refresh_after > Instant::now() {
                return Ok(cached.token.clone());
            }
        }

        let exchanged = self.exchange().await?;
        let lifetime = Duration::from_secs(exchanged.expires_in).saturating_sub(REFRESH_MARGIN);
        debug!(expires_in = exchanged.expires_in, "obtained store access token");

        *guard = Some(CachedAccessToken {
            token: exchanged.access_token.clone(),
            refresh_after: Instant::now() + lifetime,
        });

        Ok(exchanged.access_token)
    }
}
