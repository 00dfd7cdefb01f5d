use std::sync::Arc;

use crate::access_control::{
    application::{
        acl::access_control_facade_impl::AccessControlFacadeImpl,
        query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
    },
    interfaces::acl::access_control_facade::AccessControlFacade,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_access_control_facade() -> Arc<dyn AccessControlFacade> {
    let query_service = Arc::new(AccessControlQueryServiceImpl::new());
    Arc::new(AccessControlFacadeImpl::new(query_service))
}
