use axum::{
    Json,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};

use crate::{
    iam_integration::domain::model::enums::authentication_error::AuthenticationError,
    shared::interfaces::rest::{
        request_validator::RequestValidationError,
        resources::error_response_resource::{ErrorResponseResource, FieldErrorResource},
    },
};

pub type ApiError = (StatusCode, Json<ErrorResponseResource>);

pub const STORE_UNAVAILABLE_DETAIL: &str = "Document store is unavailable.";
pub const STORE_WRITE_FAILED_DETAIL: &str = "Document store write failed.";

/// Raw `Authorization` header value. A header that is not visible ASCII is passed on as an
/// empty credential so it is rejected as malformed rather than as missing.
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default())
}

pub fn map_authentication_error(error: AuthenticationError) -> ApiError {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponseResource::new(error.to_string())),
    )
}

pub fn map_validation_error(error: RequestValidationError) -> ApiError {
    let errors = error
        .violations()
        .iter()
        .map(|violation| FieldErrorResource {
            field: violation.field.clone(),
            message: violation.message.clone(),
        })
        .collect();

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponseResource {
            detail: error.to_string(),
            errors: Some(errors),
        }),
    )
}

pub fn internal_error(detail: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseResource::new(detail)),
    )
}
