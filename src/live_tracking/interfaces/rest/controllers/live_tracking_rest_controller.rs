use std::sync::Arc;

use axum::{Json, Router, body::Bytes, extract::State, http::HeaderMap, routing::post};
use tracing::error;

use crate::{
    document_store::domain::model::enums::document_store_error::DocumentStoreError,
    iam_integration::domain::services::token_verification_service::TokenVerificationService,
    live_tracking::{
        domain::{
            model::{
                commands::update_vehicle_position_command::UpdateVehiclePositionCommand,
                enums::live_tracking_domain_error::LiveTrackingDomainError,
            },
            services::live_tracking_command_service::LiveTrackingCommandService,
        },
        interfaces::rest::resources::{
            update_gps_request_resource::UpdateGpsRequestResource,
            update_gps_response_resource::UpdateGpsResponseResource,
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

pub const GPS_UPDATED_MESSAGE: &str = "GPS location updated successfully.";

#[derive(Clone)]
pub struct LiveTrackingRestControllerState {
    pub token_verification_service: Arc<dyn TokenVerificationService>,
    pub command_service: Arc<dyn LiveTrackingCommandService>,
}

pub fn router(state: LiveTrackingRestControllerState) -> Router {
    Router::new()
        .route("/api/secure/update_gps", post(update_gps))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/secure/update_gps",
    tag = "live-tracking",
    request_body = UpdateGpsRequestResource,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Vehicle position stored", body = UpdateGpsResponseResource),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponseResource),
        (status = 422, description = "Invalid payload", body = ErrorResponseResource),
        (status = 500, description = "Document store failure", body = ErrorResponseResource)
    )
)]
pub async fn update_gps(
    State(state): State<LiveTrackingRestControllerState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UpdateGpsResponseResource>, ApiError> {
    let reporter_id = state
        .token_verification_service
        .verify(authorization_header(&headers))
        .await
        .map_err(map_authentication_error)?;

    let request = parse_payload::<UpdateGpsRequestResource>(&body).map_err(map_validation_error)?;

    let coordinates = format!("{:?}, {:?}", request.latitude, request.longitude);
    let command = UpdateVehiclePositionCommand::new(
        reporter_id,
        request.vehicle_id.clone(),
        request.latitude,
        request.longitude,
    );

    state
        .command_service
        .handle_update_vehicle_position(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(UpdateGpsResponseResource {
        message: GPS_UPDATED_MESSAGE.to_string(),
        vehicle: request.vehicle_id,
        coordinates,
    }))
}

fn map_domain_error(error: LiveTrackingDomainError) -> ApiError {
    match error {
        LiveTrackingDomainError::Store(DocumentStoreError::Unavailable(cause)) => {
            error!(cause = %cause, "gps write skipped: document store unavailable");
            internal_error(STORE_UNAVAILABLE_DETAIL)
        }
        LiveTrackingDomainError::Store(DocumentStoreError::WriteFailure(cause)) => {
            error!(cause = %cause, "gps write failed");
            internal_error(STORE_WRITE_FAILED_DETAIL)
        }
    }
}
