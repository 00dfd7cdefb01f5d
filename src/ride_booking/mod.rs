use std::sync::Arc;

use axum::Router;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    document_store::infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
    iam_integration::domain::services::token_verification_service::TokenVerificationService,
    ride_booking::{
        application::command_services::ride_booking_command_service_impl::RideBookingCommandServiceImpl,
        interfaces::rest::controllers::ride_booking_rest_controller::{
            self, RideBookingRestControllerState,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_ride_booking_router(
    token_verification_service: Arc<dyn TokenVerificationService>,
    access_control_facade: Arc<dyn AccessControlFacade>,
    document_store: Arc<dyn DocumentStoreRepository>,
) -> Router {
    let command_service = Arc::new(RideBookingCommandServiceImpl::new(
        access_control_facade,
        document_store,
    ));

    ride_booking_rest_controller::router(RideBookingRestControllerState {
        token_verification_service,
        command_service,
    })
}
