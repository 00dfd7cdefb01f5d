pub mod booking_status;
pub mod ride_booking_domain_error;
