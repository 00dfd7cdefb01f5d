pub mod booking_record;
