use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateGpsResponseResource {
    pub message: String,
    pub vehicle: String,
    /// `"<latitude>, <longitude>"` as received.
    pub coordinates: String,
}
