pub mod document_store_error;
