use async_trait::async_trait;

use crate::live_tracking::domain::model::{
    commands::update_vehicle_position_command::UpdateVehiclePositionCommand,
    enums::live_tracking_domain_error::LiveTrackingDomainError,
};

#[async_trait]
pub trait LiveTrackingCommandService: Send + Sync {
    async fn handle_update_vehicle_position(
        &self,
        command: UpdateVehiclePositionCommand,
    ) -> Result<(), LiveTrackingDomainError>;
}
