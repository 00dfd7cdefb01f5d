use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    document_store::infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
    shared::interfaces::rest::resources::health_response_resource::{
        HealthResponseResource, RootResponseResource,
    },
};

pub const ROOT_MESSAGE: &str = "KidTrack Backend is Running";

#[derive(Clone)]
pub struct HealthRestControllerState {
    pub document_store: Arc<dyn DocumentStoreRepository>,
}

pub fn router(state: HealthRestControllerState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service banner", body = RootResponseResource)
    )
)]
pub async fn read_root() -> Json<RootResponseResource> {
    Json(RootResponseResource {
        message: ROOT_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is up; reports whether the document store is usable", body = HealthResponseResource)
    )
)]
pub async fn health(State(state): State<HealthRestControllerState>) -> Json<HealthResponseResource> {
    let document_store = if state.document_store.is_available() {
        "available"
    } else {
        "unavailable"
    };

    Json(HealthResponseResource {
        status: "ok".to_string(),
        document_store: document_store.to_string(),
    })
}
