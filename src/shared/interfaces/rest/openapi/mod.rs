pub mod api_doc;
pub mod security;
