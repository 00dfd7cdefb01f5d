use async_trait::async_trait;

use crate::access_control::domain::model::{
    enums::access_control_domain_error::AccessControlDomainError,
    queries::authorize_booking_query::AuthorizeBookingQuery,
};

#[async_trait]
pub trait AccessControlQueryService: Send + Sync {
    async fn handle_authorize_booking(
        &self,
        query: AuthorizeBookingQuery,
    ) -> Result<(), AccessControlDomainError>;
}
