#[path = "support/fixtures.rs"]
pub mod fixtures;

pub use fakes::FakeIamAuthenticationFacade;
pub use fixtures::{
    PROJECT_ID, TEST_KEY_ID, firebase_claims, jwks_with_test_key, now_epoch, sign_token,
};
pub use harness::{spawn_jwks_server, unreachable_url};
