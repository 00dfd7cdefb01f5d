use async_trait::async_trait;
use tracing::warn;

use crate::access_control::domain::{
    model::{
        enums::access_control_domain_error::AccessControlDomainError,
        queries::authorize_booking_query::AuthorizeBookingQuery,
    },
    services::access_control_query_service::AccessControlQueryService,
};

/// Single-field ownership check: the verified subject must be the user named in the request.
/// No delegation, roles, or admin override.
#[derive(Default)]
pub struct AccessControlQueryServiceImpl;

impl AccessControlQueryServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AccessControlQueryService for AccessControlQueryServiceImpl {
    async fn handle_authorize_booking(
        &self,
        query: AuthorizeBookingQuery,
    ) -> Result<(), AccessControlDomainError> {
        if query.subject_id().as_str() != query.requested_user_id() {
            warn!(
                subject_id = query.subject_id().as_str(),
                requested_user_id = query.requested_user_id(),
                "booking rejected: identity mismatch"
            );
            return Err(AccessControlDomainError::IdentityMismatch);
        }

        Ok(())
    }
}
