/// Lifecycle state stored on a booking. New bookings wait for a driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingStatus {
    PendingDriverAssignment,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PendingDriverAssignment => "PENDING_DRIVER_ASSIGNMENT",
        }
    }
}
