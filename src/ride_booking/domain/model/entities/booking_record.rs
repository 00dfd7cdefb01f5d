use crate::{
    document_store::domain::model::entities::document::Document,
    iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
    ride_booking::domain::model::{
        commands::book_ride_command::BookRideCommand, enums::booking_status::BookingStatus,
    },
};

/// Persisted shape of a booking. `uid` always comes from the verified token.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRecord {
    pub uid: AuthenticatedUserId,
    pub pickup: String,
    pub dropoff: String,
    pub date: String,
    pub status: BookingStatus,
}

impl BookingRecord {
    pub fn pending(command: &BookRideCommand) -> Self {
        Self {
            uid: command.subject_id().clone(),
            pickup: command.pickup_location().to_string(),
            dropoff: command.dropoff_location().to_string(),
            date: command.schedule_date().to_string(),
            status: BookingStatus::PendingDriverAssignment,
        }
    }

    pub fn to_document(&self) -> Document {
        Document::new()
            .with_string("uid", self.uid.as_str())
            .with_string("pickup", &self.pickup)
            .with_string("dropoff", &self.dropoff)
            .with_string("date", &self.date)
            .with_string("status", self.status.as_str())
    }
}
