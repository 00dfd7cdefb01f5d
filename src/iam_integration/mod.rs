use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    config::app_config::AppConfig,
    iam_integration::{
        application::{
            acl::{
                firebase_iam_authentication_facade_impl::{
                    FirebaseIamAuthenticationFacadeImpl, FirebaseIamSettings,
                },
                unconfigured_iam_authentication_facade_impl::UnconfiguredIamAuthenticationFacadeImpl,
            },
            services::token_verification_service_impl::TokenVerificationServiceImpl,
        },
        domain::services::token_verification_service::TokenVerificationService,
        interfaces::acl::iam_authentication_facade::IamAuthenticationFacade,
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_token_verification_service(
    config: &AppConfig,
    client: reqwest::Client,
    project_id: Option<&str>,
) -> Arc<dyn TokenVerificationService> {
    let facade: Arc<dyn IamAuthenticationFacade> = match project_id {
        Some(project_id) => {
            info!(project_id, jwks_url = %config.firebase_jwks_url, "firebase token verification enabled");
            Arc::new(FirebaseIamAuthenticationFacadeImpl::new(
                client,
                FirebaseIamSettings::new(project_id, config.firebase_jwks_url.clone()),
            ))
        }
        None => {
            warn!("no firebase project id resolved; secure routes will reject every token");
            Arc::new(UnconfiguredIamAuthenticationFacadeImpl::new(
                "firebase project id is not configured",
            ))
        }
    };

    Arc::new(TokenVerificationServiceImpl::new_with_cache_ttl(
        facade,
        config.token_verification_cache_ttl,
    ))
}
