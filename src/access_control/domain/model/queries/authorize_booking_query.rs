use crate::iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId;

#[derive(Clone, Debug)]
pub struct AuthorizeBookingQuery {
    subject_id: AuthenticatedUserId,
    requested_user_id: String,
}

impl AuthorizeBookingQuery {
    pub fn new(subject_id: AuthenticatedUserId, requested_user_id: String) -> Self {
        Self {
            subject_id,
            requested_user_id,
        }
    }

    pub fn subject_id(&self) -> &AuthenticatedUserId {
        &self.subject_id
    }
    pub fn requested_user_id(&self) -> &str {
        &self.requested_user_id
    }
}
