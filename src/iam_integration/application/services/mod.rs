pub mod token_verification_service_impl;
