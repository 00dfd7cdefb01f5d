pub mod ride_booking_command_service;
