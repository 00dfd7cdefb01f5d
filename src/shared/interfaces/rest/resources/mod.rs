pub mod error_response_resource;
pub mod health_response_resource;
