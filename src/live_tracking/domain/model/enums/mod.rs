pub mod live_tracking_domain_error;
