pub mod access_control_query_service_impl;
