//! HTTP Handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{ConnectInfo, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use prometheus::{Encoder, Registry, TextEncoder};
use protocol::AuthenticationRequest;

use crate::application::AuthenticationEngine;
use crate::domain::repository::IdentityRepository;
use crate::presentation::dto::{SessionRequest, SessionResponse};

/// Shared state for the gate handlers
pub struct AuthAppState<R>
where
    R: IdentityRepository + Send + Sync + 'static,
{
    pub engine: Arc<AuthenticationEngine<R>>,
    pub registry: Arc<Registry>,
}

impl<R> Clone for AuthAppState<R>
where
    R: IdentityRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            registry: self.registry.clone(),
        }
    }
}

/// POST /v1/sessions
///
/// The request IP is the connection peer address; the body never carries
/// it. Transient failures map to 503 so callers know a retry may help;
/// everything else is 401.
pub async fn create_session<R>(
    State(state): State<AuthAppState<R>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<SessionRequest>,
) -> Response
where
    R: IdentityRepository + Send + Sync + 'static,
{
    let request = AuthenticationRequest {
        system_id: req.system_id,
        password: req.password,
        ip: addr.ip().to_string(),
    };

    match state.engine.authenticate(&request).await {
        Ok(response) => (
            StatusCode::OK,
            Json(SessionResponse {
                system_id: response.system_id,
                session_id: response.session_id,
                customer_id: response.customer_id,
            }),
        )
            .into_response(),
        Err(failure) => {
            let status = if failure.error.is_transient() {
                StatusCode::SERVICE_UNAVAILABLE
            } else {
                StatusCode::UNAUTHORIZED
            };
            (status, Json(failure)).into_response()
        }
    }
}

/// GET /metrics
pub async fn metrics<R>(State(state): State<AuthAppState<R>>) -> Response
where
    R: IdentityRepository + Send + Sync + 'static,
{
    let encoder = TextEncoder::new();
    match encoder.encode_to_string(&state.registry.gather()) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, encoder.format_type().to_string())],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}
