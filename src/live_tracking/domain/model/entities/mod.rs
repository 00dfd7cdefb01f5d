pub mod live_tracking_record;
