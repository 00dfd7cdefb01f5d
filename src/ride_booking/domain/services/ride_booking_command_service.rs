use async_trait::async_trait;

use crate::ride_booking::domain::model::{
    commands::book_ride_command::BookRideCommand,
    enums::ride_booking_domain_error::RideBookingDomainError,
};

#[derive(Clone, Debug)]
pub struct BookingConfirmation {
    pub booking_id: String,
}

#[async_trait]
pub trait RideBookingCommandService: Send + Sync {
    async fn handle_book_ride(
        &self,
        command: BookRideCommand,
    ) -> Result<BookingConfirmation, RideBookingDomainError>;
}
