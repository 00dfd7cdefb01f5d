use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::{
        domain::{
            model::{
                enums::access_control_domain_error::AccessControlDomainError,
                queries::authorize_booking_query::AuthorizeBookingQuery,
            },
            services::access_control_query_service::AccessControlQueryService,
        },
        interfaces::acl::access_control_facade::AccessControlFacade,
    },
    iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
};

pub struct AccessControlFacadeImpl {
    query_service: Arc<dyn AccessControlQueryService>,
}

impl AccessControlFacadeImpl {
    pub fn new(query_service: Arc<dyn AccessControlQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl AccessControlFacade for AccessControlFacadeImpl {
    async fn authorize_booking(
        &self,
        subject_id: &AuthenticatedUserId,
        requested_user_id: &str,
    ) -> Result<(), AccessControlDomainError> {
        let query = AuthorizeBookingQuery::new(subject_id.clone(), requested_user_id.to_string());
        self.query_service.handle_authorize_booking(query).await
    }
}
