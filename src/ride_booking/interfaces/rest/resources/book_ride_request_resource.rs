use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::interfaces::rest::request_validator::{FieldKind, PayloadShape};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate)]
pub struct BookRideRequestResource {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub pickup_location: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub dropoff_location: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub schedule_date: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
}

impl PayloadShape for BookRideRequestResource {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("pickup_location", FieldKind::String),
        ("dropoff_location", FieldKind::String),
        ("schedule_date", FieldKind::String),
        ("user_id", FieldKind::String),
    ];
}
