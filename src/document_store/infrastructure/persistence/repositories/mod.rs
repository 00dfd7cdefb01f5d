pub mod document_store_repository;
pub mod firestore;
pub mod in_memory;
pub mod unavailable_document_store_repository_impl;
