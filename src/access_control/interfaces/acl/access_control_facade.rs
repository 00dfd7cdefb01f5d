use async_trait::async_trait;

use crate::{
    access_control::domain::model::enums::access_control_domain_error::AccessControlDomainError,
    iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
};

#[async_trait]
pub trait AccessControlFacade: Send + Sync {
    async fn authorize_booking(
        &self,
        subject_id: &AuthenticatedUserId,
        requested_user_id: &str,
    ) -> Result<(), AccessControlDomainError>;
}
