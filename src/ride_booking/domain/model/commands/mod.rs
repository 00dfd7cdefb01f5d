pub mod book_ride_command;
