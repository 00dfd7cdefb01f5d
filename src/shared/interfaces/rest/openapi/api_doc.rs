use utoipa::OpenApi;

use crate::{
    live_tracking::interfaces::rest::resources::{
        update_gps_request_resource::UpdateGpsRequestResource,
        update_gps_response_resource::UpdateGpsResponseResource,
    },
    ride_booking::interfaces::rest::resources::{
        book_ride_request_resource::BookRideRequestResource,
        book_ride_response_resource::BookRideResponseResource,
    },
    shared::interfaces::rest::{
        openapi::security::BearerSecurityAddon,
        resources::{
            error_response_resource::{ErrorResponseResource, FieldErrorResource},
            health_response_resource::{HealthResponseResource, RootResponseResource},
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::shared::interfaces::rest::controllers::health_rest_controller::read_root,
        crate::shared::interfaces::rest::controllers::health_rest_controller::health,
        crate::ride_booking::interfaces::rest::controllers::ride_booking_rest_controller::book_ride,
        crate::live_tracking::interfaces::rest::controllers::live_tracking_rest_controller::update_gps
    ),
    components(
        schemas(
            RootResponseResource,
            HealthResponseResource,
            ErrorResponseResource,
            FieldErrorResource,
            BookRideRequestResource,
            BookRideResponseResource,
            UpdateGpsRequestResource,
            UpdateGpsResponseResource
        )
    ),
    tags(
        (name = "health", description = "Liveness and store availability"),
        (name = "ride-booking", description = "Ride booking bounded context"),
        (name = "live-tracking", description = "Live vehicle position bounded context")
    ),
    modifiers(&BearerSecurityAddon)
)]
pub struct ApiDoc;
