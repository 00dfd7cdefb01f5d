pub mod ride_booking_rest_controller;
