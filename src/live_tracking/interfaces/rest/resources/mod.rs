pub mod update_gps_request_resource;
pub mod update_gps_response_resource;
