use async_trait::async_trait;

use crate::iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId;

/// What a successful ID-token check yields.
#[derive(Clone, Debug)]
pub struct VerifiedUserContext {
    pub subject_id: AuthenticatedUserId,
    /// Token `exp` claim. Caps how long a verification may be served from the cache.
    pub exp_epoch_seconds: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum IamIntegrationError {
    /// The token itself is bad: malformed, badly signed, expired or for another project.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// The verifier could not decide, e.g. the signing keys are unreachable.
    #[error("token verifier unavailable: {0}")]
    Unavailable(String),
}

/// Checks a raw ID token with the identity provider.
#[async_trait]
pub trait IamAuthenticationFacade: Send + Sync {
    async fn verify_id_token(
        &self,
        id_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError>;
}
