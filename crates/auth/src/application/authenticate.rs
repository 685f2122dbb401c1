//! Authenticate Use Case
//!
//! Orchestrates lookup, IP check, and password check into one decision.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use protocol::{
    AuthErrorCode, AuthOutcome, AuthenticationRequest, AuthenticationResponse,
    UnsuccessfulResponse,
};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::repository::IdentityRepository;
use crate::metrics::AuthCallMetrics;

/// Authentication decision engine
///
/// Stateless across calls: no caching, no locks held across the store
/// call, no retries. Every call is a fresh read reflecting the store's
/// current state, and every terminal path increments exactly one counter.
pub struct AuthenticationEngine<R>
where
    R: IdentityRepository,
{
    store: Arc<R>,
    config: Arc<AuthConfig>,
    metrics: Arc<AuthCallMetrics>,
}

impl<R> AuthenticationEngine<R>
where
    R: IdentityRepository,
{
    pub fn new(store: Arc<R>, config: Arc<AuthConfig>, metrics: Arc<AuthCallMetrics>) -> Self {
        Self {
            store,
            config,
            metrics,
        }
    }

    /// Decide one authentication attempt
    ///
    /// Pipeline, short-circuiting on first failure, in fixed order:
    /// identity lookup, IP allow-list check, password check. Never panics
    /// or propagates a fault across its boundary - the result is always
    /// the tagged success/failure value.
    pub async fn authenticate(&self, request: &AuthenticationRequest) -> AuthOutcome {
        // store error / unknown system_id / incomplete record
        let identity = match self.store.fetch(&request.system_id).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::info!(
                    system_id = %request.system_id,
                    error = %e,
                    "identity lookup failed"
                );
                return Err(self.fail(e.error_code()));
            }
        };

        // originating address outside the allow-list
        if !identity.permits_ip(&request.ip) {
            tracing::info!(
                system_id = %request.system_id,
                ip = %request.ip,
                "IP is not allow-listed for the session"
            );
            return Err(self.fail(AuthErrorCode::IpNotAllowed));
        }

        // password mismatch
        let password = ClearTextPassword::from(request.password.as_str());
        if !identity.password_hash.verify(&password, self.config.pepper()) {
            tracing::info!(system_id = %request.system_id, "password is incorrect");
            return Err(self.fail(AuthErrorCode::BadPassword));
        }

        // successful authentication
        self.metrics.record_success();
        let response = AuthenticationResponse {
            system_id: identity.system_id,
            session_id: Uuid::new_v4().to_string(),
            customer_id: identity.customer_id,
        };
        tracing::debug!(
            customer_id = %response.customer_id,
            session_id = %response.session_id,
            "account successfully authenticated"
        );
        Ok(response)
    }

    /// Count the failure and build the response
    fn fail(&self, error: AuthErrorCode) -> UnsuccessfulResponse {
        self.metrics.record_failure(error);
        UnsuccessfulResponse::new(error)
    }
}
