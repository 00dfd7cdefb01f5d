use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct BookRideResponseResource {
    pub message: String,
    pub booking_status: String,
    pub booking_id: String,
}
