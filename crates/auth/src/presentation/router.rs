//! Gate Router

use axum::{
    Router,
    routing::{get, post},
};
use prometheus::Registry;
use std::sync::Arc;

use crate::application::authenticate::AuthenticationEngine;
use crate::application::config::AuthConfig;
use crate::domain::repository::IdentityRepository;
use crate::infra::postgres::PgIdentityRepository;
use crate::metrics::AuthCallMetrics;
use crate::presentation::handlers::{self, AuthAppState};

/// Re-export for binary wiring
pub use crate::presentation::handlers::AuthAppState as AppState;

/// Create the gate router with the PostgreSQL identity store
pub fn auth_router(
    repo: PgIdentityRepository,
    config: AuthConfig,
    registry: Arc<Registry>,
) -> Result<Router, prometheus::Error> {
    auth_router_generic(repo, config, registry)
}

/// Create a gate router for any identity store implementation
pub fn auth_router_generic<R>(
    repo: R,
    config: AuthConfig,
    registry: Arc<Registry>,
) -> Result<Router, prometheus::Error>
where
    R: IdentityRepository + Send + Sync + 'static,
{
    let metrics = AuthCallMetrics::new(&registry)?;
    let engine = AuthenticationEngine::new(Arc::new(repo), Arc::new(config), Arc::new(metrics));
    let state = AuthAppState {
        engine: Arc::new(engine),
        registry,
    };

    Ok(Router::new()
        .route("/v1/sessions", post(handlers::create_session::<R>))
        .route("/metrics", get(handlers::metrics::<R>))
        .route("/health", get(handlers::health))
        .with_state(state))
}
