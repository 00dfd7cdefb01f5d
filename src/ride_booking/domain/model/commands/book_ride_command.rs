use crate::iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId;

pub struct BookRideCommandParts {
    pub subject_id: AuthenticatedUserId,
    pub requested_user_id: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub schedule_date: String,
}

#[derive(Clone, Debug)]
pub struct BookRideCommand {
    subject_id: AuthenticatedUserId,
    requested_user_id: String,
    pickup_location: String,
    dropoff_location: String,
    schedule_date: String,
}

impl BookRideCommand {
    pub fn new(parts: BookRideCommandParts) -> Self {
        Self {
            subject_id: parts.subject_id,
            requested_user_id: parts.requested_user_id,
            pickup_location: parts.pickup_location,
            dropoff_location: parts.dropoff_location,
            schedule_date: parts.schedule_date,
        }
    }

    pub fn subject_id(&self) -> &AuthenticatedUserId {
        &self.subject_id
    }
    pub fn requested_user_id(&self) -> &str {
        &self.requested_user_id
    }
    pub fn pickup_location(&self) -> &str {
        &self.pickup_location
    }
    pub fn dropoff_location(&self) -> &str {
        &self.dropoff_location
    }
    pub fn schedule_date(&self) -> &str {
        &self.schedule_date
    }
}
