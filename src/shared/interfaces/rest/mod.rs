pub mod controllers;
pub mod error_mapping;
pub mod middleware;
pub mod openapi;
pub mod request_validator;
pub mod resources;
