pub mod live_tracking_command_service;
