pub mod acl;
pub mod services;
