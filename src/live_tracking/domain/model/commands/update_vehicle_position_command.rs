use crate::iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId;

#[derive(Clone, Debug)]
pub struct UpdateVehiclePositionCommand {
    reporter_id: AuthenticatedUserId,
    vehicle_id: String,
    latitude: f64,
    longitude: f64,
}

impl UpdateVehiclePositionCommand {
    pub fn new(
        reporter_id: AuthenticatedUserId,
        vehicle_id: String,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            reporter_id,
            vehicle_id,
            latitude,
            longitude,
        }
    }

    pub fn reporter_id(&self) -> &AuthenticatedUserId {
        &self.reporter_id
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
