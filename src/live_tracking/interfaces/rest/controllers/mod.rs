pub mod live_tracking_rest_controller;
