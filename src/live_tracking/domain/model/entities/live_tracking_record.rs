use chrono::{DateTime, Utc};

use crate::{
    document_store::domain::model::entities::document::{Document, DocumentValue},
    iam_integration::domain::model::value_objects::authenticated_user_id::AuthenticatedUserId,
};

/// Last reported position of one vehicle. Every write replaces the whole record.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveTrackingRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DocumentValue,
    pub driver_uid: AuthenticatedUserId,
    pub expires_at: Option<DateTime<Utc>>,
}

impl LiveTrackingRecord {
    pub fn to_document(&self) -> Document {
        let document = Document::new()
            .with_double("latitude", self.latitude)
            .with_double("longitude", self.longitude)
            .with_field("timestamp", self.timestamp.clone())
            .with_string("driver_uid", self.driver_uid.as_str());

        match self.expires_at {
            Some(expires_at) => document.with_field("expires_at", DocumentValue::Timestamp(expires_at)),
            None => document,
        }
    }
}
