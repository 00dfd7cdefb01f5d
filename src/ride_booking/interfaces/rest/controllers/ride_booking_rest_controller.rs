use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use tracing::error;

use crate::{
    document_store::domain::model::enums::document_store_error::DocumentStoreError,
    iam_integration::domain::services::token_verification_service::TokenVerificationService,
    ride_booking::{
        domain::{
            model::{
                commands::book_ride_command::{BookRideCommand, BookRideCommandParts},
                enums::ride_booking_domain_error::RideBookingDomainError,
            },
            services::ride_booking_command_service::RideBookingCommandService,
        },
        interfaces::rest::resources::{
            book_ride_request_resource::BookRideRequestResource,
            book_ride_response_resource::BookRideResponseResource,
        },
    },
    shared::interfaces::rest::{
        error_mapping::{
            ApiError, STORE_UNAVAILABLE_DETAIL, STORE_WRITE_FAILED_DETAIL, authorization_header,
            internal_error, map_authentication_error, map_validation_error,
        },
        request_validator::parse_payload,
        resources::error_response_resource::ErrorResponseResource,
    },
};

pub const BOOKING_ACCEPTED_MESSAGE: &str = "Ride successfully booked and secured by backend.";
pub const BOOKING_ACCEPTED_STATUS: &str = "Processing";

#[derive(Clone)]
pub struct RideBookingRestControllerState {
    pub token_verification_service: Arc<dyn TokenVerificationService>,
    pub command_service: Arc<dyn RideBookingCommandService>,
}

pub fn router(state: RideBookingRestControllerState) -> Router {
    Router::new()
        .route("/api/secure/book_ride", post(book_ride))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/secure/book_ride",
    tag = "ride-booking",
    request_body = BookRideRequestResource,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Booking stored", body = BookRideResponseResource),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponseResource),
        (status = 403, description = "Token subject does not match user_id", body = ErrorResponseResource),
        (status = 422, description = "Invalid payload", body = ErrorResponseResource),
        (status = 500, description = "Document store failure", body = ErrorResponseResource)
    )
)]
pub async fn book_ride(
    State(state): State<RideBookingRestControllerState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BookRideResponseResource>, ApiError> {
    let subject_id = state
        .token_verification_service
        .verify(authorization_header(&headers))
        .await
        .map_err(map_authentication_error)?;

    let request = parse_payload::<BookRideRequestResource>(&body).map_err(map_validation_error)?;

    let command = BookRideCommand::new(BookRideCommandParts {
        subject_id,
        requested_user_id: request.user_id,
        pickup_location: request.pickup_location,
        dropoff_location: request.dropoff_location,
        schedule_date: request.schedule_date,
    });

    let confirmation = state
        .command_service
        .handle_book_ride(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BookRideResponseResource {
        message: BOOKING_ACCEPTED_MESSAGE.to_string(),
        booking_status: BOOKING_ACCEPTED_STATUS.to_string(),
        booking_id: confirmation.booking_id,
    }))
}

fn map_domain_error(error: RideBookingDomainError) -> ApiError {
    match error {
        RideBookingDomainError::AccessDenied(denied) => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponseResource::new(denied.to_string())),
        ),
        RideBookingDomainError::Store(DocumentStoreError::Unavailable(cause)) => {
            error!(cause = %cause, "booking write skipped: document store unavailable");
            internal_error(STORE_UNAVAILABLE_DETAIL)
        }
        RideBookingDomainError::Store(DocumentStoreError::WriteFailure(cause)) => {
            error!(cause = %cause, "booking write failed");
            internal_error(STORE_WRITE_FAILED_DETAIL)
        }
    }
}
