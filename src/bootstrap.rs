use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    access_control::{
        build_access_control_facade, interfaces::acl::access_control_facade::AccessControlFacade,
    },
    config::{
        app_config::AppConfig,
        service_account_key::{ServiceAccountKey, ServiceAccountKeyError},
    },
    document_store::{
        build_document_store_repository,
        infrastructure::persistence::repositories::document_store_repository::DocumentStoreRepository,
    },
    iam_integration::{
        build_token_verification_service,
        domain::services::token_verification_service::TokenVerificationService,
    },
    live_tracking::build_live_tracking_router,
    ride_booking::build_ride_booking_router,
    shared::interfaces::rest::{
        controllers::health_rest_controller::{self, HealthRestControllerState},
        middleware::{cors_layer, trace_layer},
        openapi::api_doc::ApiDoc,
    },
};

/// Long-lived collaborators shared by every request.
#[derive(Clone)]
pub struct AppComponents {
    pub token_verification_service: Arc<dyn TokenVerificationService>,
    pub access_control_facade: Arc<dyn AccessControlFacade>,
    pub document_store: Arc<dyn DocumentStoreRepository>,
}

/// Wires the external integrations. Missing credentials degrade the affected routes
/// instead of stopping the process.
pub fn build_components(config: &AppConfig) -> AppComponents {
    let service_account = match ServiceAccountKey::load(config.firebase_admin_key_path.as_deref()) {
        Ok(key) => {
            info!(project_id = %key.project_id, client_email = %key.client_email, "loaded service account");
            Some(key)
        }
        Err(ServiceAccountKeyError::NotConfigured) => {
            warn!("no service account key configured");
            None
        }
        Err(e) => {
            warn!(error = %e, "service account key could not be loaded");
            None
        }
    };

    let client = reqwest::Client::new();
    let project_id = config
        .firebase_project_id
        .clone()
        .or_else(|| service_account.as_ref().map(|key| key.project_id.clone()));

    AppComponents {
        token_verification_service: build_token_verification_service(
            config,
            client.clone(),
            project_id.as_deref(),
        ),
        access_control_facade: build_access_control_facade(),
        document_store: build_document_store_repository(config, client, service_account.as_ref()),
    }
}

pub fn build_app_router(components: AppComponents, config: &AppConfig) -> Router {
    let health_router = health_rest_controller::router(HealthRestControllerState {
        document_store: components.document_store.clone(),
    });
    let ride_booking_router = build_ride_booking_router(
        components.token_verification_service.clone(),
        components.access_control_facade,
        components.document_store.clone(),
    );
    let live_tracking_router = build_live_tracking_router(
        components.token_verification_service,
        components.document_store,
        config.live_tracking_retention,
    );

    Router::new()
        .merge(health_router)
        .merge(ride_booking_router)
        .merge(live_tracking_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&config.cors_allowed_origins))
        .layer(trace_layer())
}
