pub mod app_config;
pub mod service_account_key;
