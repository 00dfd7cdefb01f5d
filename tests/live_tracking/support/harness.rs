use std::{sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    http::{HeaderMap, HeaderValue, header::AUTHORIZATION},
};
use kidtrack_gateway::{
    document_store::infrastructure::persistence::repositories::{
        document_store_repository::DocumentStoreRepository,
        in_memory::in_memory_document_store_repository_impl::InMemoryDocumentStoreRepositoryImpl,
    },
    live_tracking::{
        application::command_services::live_tracking_command_service_impl::LiveTrackingCommandServiceImpl,
        interfaces::rest::controllers::live_tracking_rest_controller::LiveTrackingRestControllerState,
    },
};
use serde_json::Value;

use super::fakes::FakeTokenVerificationService;

pub const DRIVER_A_TOKEN: &str = "token-driver-a";
pub const DRIVER_B_TOKEN: &str = "token-driver-b";

pub struct TrackingHarness {
    pub store: Arc<InMemoryDocumentStoreRepositoryImpl>,
    pub state: LiveTrackingRestControllerState,
}

fn token_service() -> Arc<FakeTokenVerificationService> {
    Arc::new(FakeTokenVerificationService::new(&[
        (DRIVER_A_TOKEN, "driver-a"),
        (DRIVER_B_TOKEN, "driver-b"),
    ]))
}

pub fn create_tracking_harness(retention: Option<Duration>) -> TrackingHarness {
    let store = Arc::new(InMemoryDocumentStoreRepositoryImpl::new());
    let state = LiveTrackingRestControllerState {
        token_verification_service: token_service(),
        command_service: Arc::new(LiveTrackingCommandServiceImpl::new_with_retention(
            store.clone(),
            retention,
        )),
    };

    TrackingHarness { store, state }
}

pub fn state_with_store(document_store: Arc<dyn DocumentStoreRepository>) -> LiveTrackingRestControllerState {
    LiveTrackingRestControllerState {
        token_verification_service: token_service(),
        command_service: Arc::new(LiveTrackingCommandServiceImpl::new(document_store)),
    }
}

pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).expect("header value"),
    );
    headers
}

pub fn gps_body(value: Value) -> Bytes {
    Bytes::from(value.to_string())
}
