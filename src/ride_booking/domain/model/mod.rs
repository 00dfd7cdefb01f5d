pub mod commands;
pub mod entities;
pub mod enums;
