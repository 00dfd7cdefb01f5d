use async_trait::async_trait;

use crate::iam_integration::interfaces::acl::iam_authentication_facade::{
    IamAuthenticationFacade, IamIntegrationError, VerifiedUserContext,
};

/// Installed when no Firebase project could be resolved at startup.
pub struct UnconfiguredIamAuthenticationFacadeImpl {
    reason: String,
}

impl UnconfiguredIamAuthenticationFacadeImpl {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl IamAuthenticationFacade for UnconfiguredIamAuthenticationFacadeImpl {
    async fn verify_id_token(
        &self,
        _id_token: &str,
    ) -> Result<VerifiedUserContext, IamIntegrationError> {
        Err(IamIntegrationError::Unavailable(self.reason.clone()))
    }
}
