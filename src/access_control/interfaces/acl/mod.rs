pub mod access_control_facade;
