use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    document_store::{
        domain::model::value_objects::collection_name::CollectionName,
        infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
    },
    ride_booking::domain::{
        model::{
            commands::book_ride_command::BookRideCommand, entities::booking_record::BookingRecord,
            enums::ride_booking_domain_error::RideBookingDomainError,
        },
        services::ride_booking_command_service::{BookingConfirmation, RideBookingCommandService},
    },
};

pub const BOOKINGS_COLLECTION: &str = "bookings";

pub struct RideBookingCommandServiceImpl {
    access_control_facade: Arc<dyn AccessControlFacade>,
    document_store: Arc<dyn DocumentStoreRepository>,
}

impl RideBookingCommandServiceImpl {
    pub fn new(
        access_control_facade: Arc<dyn AccessControlFacade>,
        document_store: Arc<dyn DocumentStoreRepository>,
    ) -> Self {
        Self {
            access_control_facade,
            document_store,
        }
    }
}

#[async_trait]
impl RideBookingCommandService for RideBookingCommandServiceImpl {
    async fn handle_book_ride(
        &self,
        command: BookRideCommand,
    ) -> Result<BookingConfirmation, RideBookingDomainError> {
        self.access_control_facade
            .authorize_booking(command.subject_id(), command.requested_user_id())
            .await?;

        let collection = CollectionName::new(BOOKINGS_COLLECTION)?;
        let record = BookingRecord::pending(&command);
        let booking_id = self
            .document_store
            .append(&collection, record.to_document())
            .await?;

        info!(
            booking_id = booking_id.value(),
            uid = record.uid.as_str(),
            "ride booked"
        );

        Ok(BookingConfirmation {
            booking_id: booking_id.value().to_string(),
        })
    }
}
