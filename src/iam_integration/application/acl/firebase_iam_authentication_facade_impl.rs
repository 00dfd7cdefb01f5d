use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, decode_header,
    jwk::{Jwk, JwkSet},
};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::iam_integration::{
    domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
    interfaces::acl::iam_authentication_facade::{
        IamAuthenticationFacade, IamIntegrationError, VerifiedUserContext,
    },
};

const SECURE_TOKEN_ISSUER_PREFIX: &str = "https://securetoken.google.com/";
const MAX_SUBJECT_LENGTH: usize = 128;

#[derive(Clone)]
struct CachedKeySet {
    keys: JwkSet,
    fetched_at: Instant,
    expires_at: Instant,
}

#[derive(Debug, Deserialize)]
struct FirebaseTokenClaims {
    sub: String,
    iat: u64,
    exp: u64,
}

#[derive(Clone, Debug)]
pub struct FirebaseIamSettings {
    pub project_id: String,
    pub jwks_url: String,
    pub default_jwks_ttl: Duration,
    /// Minimum age of the cached key set before an unknown `kid` may force a refetch.
    pub min_refresh_interval: Duration,
    pub leeway_seconds: u64,
}

impl FirebaseIamSettings {
    pub fn new(project_id: impl Into<String>, jwks_url: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            jwks_url: jwks_url.into(),
            default_jwks_ttl: Duration::from_secs(3600),
            min_refresh_interval: Duration::from_secs(30),
            leeway_seconds: 60,
        }
    }

    fn issuer(&self) -> String {
        format!("{SECURE_TOKEN_ISSUER_PREFIX}{}", self.project_id)
    }
}

/// Verifies Firebase ID tokens against Google's published signing keys.
pub struct FirebaseIamAuthenticationFacadeImpl {
    client: reqwest::Client,
    settings: FirebaseIamSettings,
    key_cache: RwLock<Option<CachedKeySet>>,
}

impl FirebaseIamAuthenticationFacadeImpl {
    pub fn new(client: reqwest::Client, settings: FirebaseIamSettings) -> Self {
        Self {
            client,
            settings,
            key_cache: RwLock::new(None),
        }
    }

    async fn cached_keys(&self) -> Option<JwkSet> {
        let guard = self.key_cache.read().await;
        guard.as_ref().and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.keys.clone())
            } else {
                None
            }
        })
    }

    async fn signing_keys(&self) -> Result<JwkSet, IamIntegrationError> {
        if let Some(keys) = self.cached_keys().await {
            return Ok(keys);
        }

        let mut guard = self.key_cache.write().await;
        if let Some(entry) = guard.as_ref().filter(|entry| entry.expires_at > Instant::now()) {
            return Ok(entry.keys.clone());
        }
        let fetched = self.fetch_signing_keys().await?;
        let keys = fetched.keys.clone();
        *guard = Some(fetched);
        Ok(keys)
    }

    /// Refetches for an unknown `kid`, unless the cached set is younger than
    /// `min_refresh_interval`; then the cached set is returned unchanged.
    async fn force_refresh_signing_keys(&self) -> Result<JwkSet, IamIntegrationError> {
        let mut guard = self.key_cache.write().await;
        if let Some(entry) = guard
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.settings.min_refresh_interval)
        {
            debug!("signing keys fetched recently, skipping refresh");
            return Ok(entry.keys.clone());
        }
        let fetched = self.fetch_signing_keys().await?;
        let keys = fetched.keys.clone();
        *guard = Some(fetched);
        Ok(keys)
    }

    async fn fetch_signing_keys(&self) -> Result<CachedKeySet, IamIntegrationError> {
        let response = self
            .client
            .get(&self.settings.jwks_url)
            .send()
            .await
            .map_err(|e| IamIntegrationError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| IamIntegrationError::Unavailable(e.to_string()))?;

        let ttl = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age)
            .unwrap_or(self.settings.default_jwks_ttl);

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| IamIntegrationError::Unavailable(e.to_string()))?;

        debug!(key_count = keys.keys.len(), ttl_seconds = ttl.as_secs(), "refreshed signing keys");

        let fetched_at = Instant::now();
        Ok(CachedKeySet {
            keys,
            fetched_at,
            expires_at: fetched_at + ttl,
        })
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, IamIntegrationError> {
        let keys = self.signing_keys().await?;
        let jwk = match find_key(&keys, kid) {
            Some(jwk) => jwk,
            // Keys rotate; one rate-limited refresh before giving up on an unknown kid.
            None => {
                let refreshed = self.force_refresh_signing_keys().await?;
                find_key(&refreshed, kid).ok_or_else(|| {
                    IamIntegrationError::InvalidToken("unknown signing key".to_string())
                })?
            }
        };

        DecodingKey::from_jwk(&jwk).map_err(|e| IamIntegrationError::InvalidToken(e.to_string()))
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.settings.project_id.as_str()]);
        validation.set_issuer(&[self.settings.issuer()]);
        validation.set_required_spec_claims(&["exp", "aud", "iss", "sub"]);
        validation.leeway = self.settings.leeway_seconds;
        validation
    }
}

#[async_trait]
impl IamAuthenticationFacade for FirebaseIamAuthenticationFacadeImpl {
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError> {
        if id_token.trim().is_empty() {
            return Err(IamIntegrationError::InvalidToken(
                "id token is empty".to_string(),
            ));
        }

        let header = decode_header(id_token)
            .map_err(|e| IamIntegrationError::InvalidToken(e.to_string()))?;
        if header.alg != Algorithm::RS256 {
            return Err(IamIntegrationError::InvalidToken(format!(
                "unsupported algorithm {:?}",
                header.alg
            )));
        }
        let kid = header
            .kid
            .ok_or_else(|| IamIntegrationError::InvalidToken("missing key id".to_string()))?;

        let decoding_key = self.decoding_key(&kid).await?;

        let token = decode::<FirebaseTokenClaims>(id_token, &decoding_key, &self.validation())
            .map_err(|e| IamIntegrationError::InvalidToken(e.to_string()))?;
        let claims = token.claims;

        let now = Utc::now().timestamp().max(0) as u64;
        if claims.iat > now + self.settings.leeway_seconds {
            return Err(IamIntegrationError::InvalidToken(
                "token issued in the future".to_string(),
            ));
        }
        if claims.sub.len() > MAX_SUBJECT_LENGTH {
            return Err(IamIntegrationError::InvalidToken(
                "subject is too long".to_string(),
            ));
        }

        Ok(VerifiedUserContext {
            subject_id: AuthenticatedUserId::new(&claims.sub)
                .map_err(IamIntegrationError::InvalidToken)?,
            exp_epoch_seconds: claims.exp,
        })
    }
}

fn find_key(keys: &JwkSet, kid: &str) -> Option<Jwk> {
    keys.keys
        .iter()
        .find(|jwk| jwk.common.key_id.as_deref() == Some(kid))
        .cloned()
}

fn parse_max_age(cache_control: &str) -> Option<Duration> {
    cache_control
        .split(',')
        .map(str::trim)
        .find_map(|directive| directive.strip_prefix("max-age="))
        .and_then(|seconds| seconds.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}
