pub mod update_vehicle_position_command;
