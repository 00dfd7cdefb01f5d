use std::{sync::Arc, time::Duration};

use axum::Router;

use crate::{
    document_store::infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
    iam_integration::domain::services::token_verification_service::TokenVerificationService,
    live_tracking::{
        application::command_services::live_tracking_command_service_impl::LiveTrackingCommandServiceImpl,
        interfaces::rest::controllers::live_tracking_rest_controller::{
            self, LiveTrackingRestControllerState,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_live_tracking_router(
    token_verification_service: Arc<dyn TokenVerificationService>,
    document_store: Arc<dyn DocumentStoreRepository>,
    retention: Option<Duration>,
) -> Router {
    let command_service = Arc::new(LiveTrackingCommandServiceImpl::new_with_retention(
        document_store,
        retention,
    ));

    live_tracking_rest_controller::router(LiveTrackingRestControllerState {
        token_verification_service,
        command_service,
    })
}
