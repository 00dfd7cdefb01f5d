pub mod access_control;
pub mod bootstrap;
pub mod config;
pub mod document_store;
pub mod iam_integration;
pub mod live_tracking;
pub mod ride_booking;
pub mod shared;
