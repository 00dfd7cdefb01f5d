use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    document_store::domain::model::value_objects::document_key::is_valid_path_segment,
    shared::interfaces::rest::request_validator::{FieldKind, PayloadShape},
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct UpdateGpsRequestResource {
    #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
    pub longitude: f64,

    #[validate(custom(function = "validate_vehicle_id"))]
    pub vehicle_id: String,
}

impl PayloadShape for UpdateGpsRequestResource {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("latitude", FieldKind::Number),
        ("longitude", FieldKind::Number),
        ("vehicle_id", FieldKind::String),
    ];
}

fn validate_vehicle_id(vehicle_id: &str) -> Result<(), ValidationError> {
    if vehicle_id.is_empty() {
        return Err(ValidationError::new("vehicle_id_empty")
            .with_message(Cow::Borrowed("must not be empty")));
    }
    if !is_valid_path_segment(vehicle_id) {
        return Err(ValidationError::new("vehicle_id_invalid_key")
            .with_message(Cow::Borrowed("must be a single document key without '/'")));
    }
    Ok(())
}
