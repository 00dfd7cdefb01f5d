use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::iam_integration::{
    domain::{
        model::{
            enums::authentication_error::AuthenticationError,
            value_objects::authenticated_user_id::AuthenticatedUserId,
        },
        services::token_verification_service::TokenVerificationService,
    },
    interfaces::acl::iam_authentication_facade::{IamAuthenticationFacade, IamIntegrationError},
};

const BEARER_SCHEME: &str = "bearer";

#[derive(Clone)]
struct CachedVerification {
    subject_id: AuthenticatedUserId,
    expires_at: Instant,
}

pub struct TokenVerificationServiceImpl {
    iam_authentication_facade: Arc<dyn IamAuthenticationFacade>,
    cache: RwLock<HashMap<String, CachedVerification>>,
    cache_ttl: Duration,
}

impl TokenVerificationServiceImpl {
    /// Every call reaches the identity provider.
    pub fn new(iam_authentication_facade: Arc<dyn IamAuthenticationFacade>) -> Self {
        Self::new_with_cache_ttl(iam_authentication_facade, Duration::ZERO)
    }

    /// Successful verifications are reused for at most `cache_ttl`, and never past the token's `exp`.
    pub fn new_with_cache_ttl(
        iam_authentication_facade: Arc<dyn IamAuthenticationFacade>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            iam_authentication_facade,
            cache: RwLock::new(HashMap::new()),
            cache_ttl,
        }
    }

    fn split_credential(authorization: &str) -> Result<&str, AuthenticationError> {
        let mut parts = authorization.split_whitespace();
        let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) => (scheme, token),
            _ => return Err(AuthenticationError::MalformedCredential),
        };

        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return Err(AuthenticationError::UnsupportedScheme);
        }

        Ok(token)
    }

    fn token_hash(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn caching_enabled(&self) -> bool {
        !self.cache_ttl.is_zero()
    }

    async fn get_cached(&self, token_hash: &str) -> Option<AuthenticatedUserId> {
        let guard = self.cache.read().await;
        guard.get(token_hash).and_then(|entry| {
            if entry.expires_at > Instant::now() {
                Some(entry.subject_id.clone())
            } else {
                None
            }
        })
    }

    async fn set_cache(
        &self,
        token_hash: String,
        subject_id: AuthenticatedUserId,
        exp_epoch_seconds: u64,
    ) {
        let now_epoch = Utc::now().timestamp().max(0) as u64;
        let remaining = Duration::from_secs(exp_epoch_seconds.saturating_sub(now_epoch));
        let lifetime = self.cache_ttl.min(remaining);
        if lifetime.is_zero() {
            return;
        }

        let mut guard = self.cache.write().await;
        let now = Instant::now();
        guard.retain(|_, entry| entry.expires_at > now);
        guard.insert(
            token_hash,
            CachedVerification {
                subject_id,
                expires_at: now + lifetime,
            },
        );
    }
}

#[async_trait]
impl TokenVerificationService for TokenVerificationServiceImpl {
    async fn verify(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedUserId, AuthenticationError> {
        let authorization = authorization.ok_or(AuthenticationError::MissingCredential)?;
        let token = Self::split_credential(authorization)?;

        let token_hash = self.caching_enabled().then(|| Self::token_hash(token));
        if let Some(hash) = token_hash.as_deref() {
            if let Some(subject_id) = self.get_cached(hash).await {
                return Ok(subject_id);
            }
        }

        let context = self
            .iam_authentication_facade
            .verify_id_token(token)
            .await
            .map_err(|error| match error {
                IamIntegrationError::InvalidToken(reason) => {
                    debug!(%reason, "token rejected by identity provider");
                    AuthenticationError::InvalidOrExpiredToken
                }
                IamIntegrationError::Unavailable(reason) => {
                    warn!(%reason, "token verification unavailable");
                    AuthenticationError::VerificationUnavailable
                }
            })?;

        if let Some(hash) = token_hash {
            self.set_cache(hash, context.subject_id.clone(), context.exp_epoch_seconds)
                .await;
        }

        Ok(context.subject_id)
    }
}
