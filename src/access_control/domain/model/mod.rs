pub mod enums;
pub mod queries;
