pub mod authorize_booking_query;
