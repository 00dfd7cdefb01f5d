use std::time::Duration;

use jsonwebtoken::{EncodingKey, Header, encode};
use kidtrack_gateway::iam_integration::{
    application::acl::{
        firebase_iam_authentication_facade_impl::{
            FirebaseIamAuthenticationFacadeImpl, FirebaseIamSettings,
        },
        unconfigured_iam_authentication_facade_impl::UnconfiguredIamAuthenticationFacadeImpl,
    },
    interfaces::acl::iam_authentication_facade::{IamAuthenticationFacade, IamIntegrationError},
};
use serde_json::json;

use crate::support::{
    PROJECT_ID, TEST_KEY_ID, firebase_claims, jwks_with_test_key, now_epoch, sign_token,
    spawn_jwks_server, unreachable_url,
};

fn facade_for(jwks_url: &str) -> FirebaseIamAuthenticationFacadeImpl {
    FirebaseIamAuthenticationFacadeImpl::new(
        reqwest::Client::new(),
        FirebaseIamSettings::new(PROJECT_ID, jwks_url),
    )
}

fn facade_refreshing_immediately(jwks_url: &str) -> FirebaseIamAuthenticationFacadeImpl {
    let mut settings = FirebaseIamSettings::new(PROJECT_ID, jwks_url);
    settings.min_refresh_interval = Duration::ZERO;
    FirebaseIamAuthenticationFacadeImpl::new(reqwest::Client::new(), settings)
}

#[tokio::test]
async fn verifies_token_signed_by_published_key() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);
    let token = sign_token(&firebase_claims("parent-42"), Some(TEST_KEY_ID));

    let context = facade
        .verify_id_token(&token)
        .await
        .expect("token should verify");

    assert_eq!(context.subject_id.as_str(), "parent-42");
    assert!(context.exp_epoch_seconds > now_epoch() as u64);
}

#[tokio::test]
async fn caches_signing_keys_between_verifications() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);
    let token = sign_token(&firebase_claims("parent-42"), Some(TEST_KEY_ID));

    facade.verify_id_token(&token).await.expect("first");
    facade.verify_id_token(&token).await.expect("second");

    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn refreshes_keys_once_for_unknown_key_id() {
    let server = spawn_jwks_server(jwks_with_test_key("rotated-out")).await;
    let facade = facade_refreshing_immediately(&server.url);
    let token = sign_token(&firebase_claims("parent-42"), Some(TEST_KEY_ID));

    let result = facade.verify_id_token(&token).await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn picks_up_rotated_key_on_refresh() {
    let server = spawn_jwks_server(jwks_with_test_key("old-key")).await;
    let facade = facade_refreshing_immediately(&server.url);

    let old_token = sign_token(&firebase_claims("parent-42"), Some("old-key"));
    facade.verify_id_token(&old_token).await.expect("old key");

    server.publish(jwks_with_test_key(TEST_KEY_ID));
    let new_token = sign_token(&firebase_claims("parent-42"), Some(TEST_KEY_ID));
    let context = facade
        .verify_id_token(&new_token)
        .await
        .expect("rotated key");

    assert_eq!(context.subject_id.as_str(), "parent-42");
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn unknown_key_ids_do_not_refetch_a_fresh_key_set() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);

    for i in 0..20 {
        let kid = format!("forged-{i}");
        let token = sign_token(&firebase_claims("parent-42"), Some(kid.as_str()));
        let result = facade.verify_id_token(&token).await;
        assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
    }

    assert_eq!(server.hits(), 1);

    let genuine = sign_token(&firebase_claims("parent-42"), Some(TEST_KEY_ID));
    facade.verify_id_token(&genuine).await.expect("known key still verifies");
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn rejects_token_for_another_project() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);
    let mut claims = firebase_claims("parent-42");
    claims["aud"] = json!("someone-else");
    claims["iss"] = json!("https://securetoken.google.com/someone-else");

    let result = facade
        .verify_id_token(&sign_token(&claims, Some(TEST_KEY_ID)))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
}

#[tokio::test]
async fn rejects_token_with_wrong_issuer() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);
    let mut claims = firebase_claims("parent-42");
    claims["iss"] = json!("https://accounts.example.com");

    let result = facade
        .verify_id_token(&sign_token(&claims, Some(TEST_KEY_ID)))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
}

#[tokio::test]
async fn rejects_expired_token() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);
    let mut claims = firebase_claims("parent-42");
    claims["iat"] = json!(now_epoch() - 7200);
    claims["exp"] = json!(now_epoch() - 3600);

    let result = facade
        .verify_id_token(&sign_token(&claims, Some(TEST_KEY_ID)))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
}

#[tokio::test]
async fn rejects_token_issued_in_the_future() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);
    let mut claims = firebase_claims("parent-42");
    claims["iat"] = json!(now_epoch() + 600);

    let result = facade
        .verify_id_token(&sign_token(&claims, Some(TEST_KEY_ID)))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
}

#[tokio::test]
async fn rejects_empty_subject() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);

    let result = facade
        .verify_id_token(&sign_token(&firebase_claims(""), Some(TEST_KEY_ID)))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
}

#[tokio::test]
async fn rejects_token_without_key_id() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);

    let result = facade
        .verify_id_token(&sign_token(&firebase_claims("parent-42"), None))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn rejects_symmetric_algorithm() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);
    let mut header = Header::default();
    header.kid = Some(TEST_KEY_ID.to_string());
    let token = encode(
        &header,
        &firebase_claims("parent-42"),
        &EncodingKey::from_secret(b"shared-secret"),
    )
    .expect("hs256 token");

    let result = facade.verify_id_token(&token).await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
}

#[tokio::test]
async fn rejects_garbage_token() {
    let server = spawn_jwks_server(jwks_with_test_key(TEST_KEY_ID)).await;
    let facade = facade_for(&server.url);

    let result = facade.verify_id_token("not-a-jwt").await;

    assert!(matches!(result, Err(IamIntegrationError::InvalidToken(_))));
}

#[tokio::test]
async fn reports_unavailable_when_keys_cannot_be_fetched() {
    let facade = facade_for(&unreachable_url().await);

    let result = facade
        .verify_id_token(&sign_token(&firebase_claims("parent-42"), Some(TEST_KEY_ID)))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::Unavailable(_))));
}

#[tokio::test]
async fn unconfigured_facade_always_reports_unavailable() {
    let facade = UnconfiguredIamAuthenticationFacadeImpl::new("no project");

    let result = facade
        .verify_id_token(&sign_token(&firebase_claims("parent-42"), Some(TEST_KEY_ID)))
        .await;

    assert!(matches!(result, Err(IamIntegrationError::Unavailable(_))));
}
