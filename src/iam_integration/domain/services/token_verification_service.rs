use async_trait::async_trait;

use crate::iam_integration::domain::model::{
    enums::authentication_error::AuthenticationError,
    value_objects::authenticated_user_id::AuthenticatedUserId,
};

#[async_trait]
pub trait TokenVerificationService: Send + Sync {
    /// Verifies the raw `Authorization` header value (`None` when the header is absent).
    async fn verify(
        &self,
        authorization: Option<&str>,
    ) -> Result<AuthenticatedUserId, AuthenticationError>;
}
