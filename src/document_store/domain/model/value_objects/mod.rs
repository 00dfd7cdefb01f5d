pub mod collection_name;
pub mod document_key;
