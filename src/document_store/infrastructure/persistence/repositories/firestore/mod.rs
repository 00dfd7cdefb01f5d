pub mod firestore_document_store_repository_impl;
pub mod service_account_access_token_provider;
