
pub use fixtures::service_account_key;
pub use harness::{FirestoreStub, spawn_firestore_stub, spawn_token_endpoint};
