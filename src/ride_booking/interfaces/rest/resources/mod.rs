pub mod book_ride_request_resource;
pub mod book_ride_response_resource;
