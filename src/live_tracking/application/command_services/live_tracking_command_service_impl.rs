use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;

use crate::{
    document_store::{
        domain::model::value_objects::{collection_name::CollectionName, document_key::DocumentKey},
        infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
    },
    live_tracking::domain::{
        model::{
            commands::update_vehicle_position_command::UpdateVehiclePositionCommand,
            entities::live_tracking_record::LiveTrackingRecord,
            enums::live_tracking_domain_error::LiveTrackingDomainError,
        },
        services::live_tracking_command_service::LiveTrackingCommandService,
    },
};

pub const LIVE_TRACKING_COLLECTION: &str = "live_tracking";

pub struct LiveTrackingCommandServiceImpl {
    document_store: Arc<dyn DocumentStoreRepository>,
    retention: Option<Duration>,
}

impl LiveTrackingCommandServiceImpl {
    pub fn new(document_store: Arc<dyn DocumentStoreRepository>) -> Self {
        Self::new_with_retention(document_store, None)
    }

    pub fn new_with_retention(
        document_store: Arc<dyn DocumentStoreRepository>,
        retention: Option<Duration>,
    ) -> Self {
        Self {
            document_store,
            retention,
        }
    }

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        let retention = TimeDelta::from_std(self.retention?).ok()?;
        Utc::now().checked_add_signed(retention)
    }
}

#[async_trait]
impl LiveTrackingCommandService for LiveTrackingCommandServiceImpl {
    // Any verified caller may report for any vehicle; there is no driver assignment to check against.
    async fn handle_update_vehicle_position(
        &self,
        command: UpdateVehiclePositionCommand,
    ) -> Result<(), LiveTrackingDomainError> {
        let collection = CollectionName::new(LIVE_TRACKING_COLLECTION)?;
        let key = DocumentKey::new(command.vehicle_id())?;

        let record = LiveTrackingRecord {
            latitude: command.latitude(),
            longitude: command.longitude(),
            timestamp: self.document_store.server_timestamp(),
            driver_uid: command.reporter_id().clone(),
            expires_at: self.expires_at(),
        };

        self.document_store
            .upsert(&collection, &key, record.to_document())
            .await?;

        info!(
            vehicle_id = key.value(),
            driver_uid = record.driver_uid.as_str(),
            "vehicle position updated"
        );
        Ok(())
    }
}
