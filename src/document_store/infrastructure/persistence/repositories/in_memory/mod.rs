pub mod in_memory_document_store_repository_impl;
