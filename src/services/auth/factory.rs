/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use tracing::info;

use crate::config::AuthConfig;
use crate::services::auth::AuthService;

pub fn build_auth_service(config: &AuthConfig) -> Arc<AuthService> {
    info!(
        max_age_seconds = config.token_max_age_seconds,
        leeway_seconds = config.token_leeway_seconds,
        failure_policy = ?config.failure_policy,
        "bearer token verification configured"
    );

    Arc::new(AuthService::new(config))
}
