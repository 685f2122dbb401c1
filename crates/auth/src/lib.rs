//! Auth - the credential gate in front of the session server
//!
//! Clean Architecture structure:
//! - `domain/` - Identity entity, allow-list value object, store trait
//! - `application/` - The authentication decision engine
//! - `infra/` - PostgreSQL identity store implementation
//! - `presentation/` - HTTP handlers and router
//! - `metrics` - Per-outcome counter family
//!
//! ## Security Model
//! - Passwords verified against Argon2id hashes, constant-time
//! - Plaintext credentials never logged or persisted
//! - Per-identity CIDR allow-lists; a present-but-unusable list denies all
//! - Every outcome maps to one stable external error code

pub mod application;
pub mod domain;
pub mod infra;
pub mod metrics;
pub mod presentation;

// Re-exports for convenience
pub use application::authenticate::AuthenticationEngine;
pub use application::config::AuthConfig;
pub use domain::repository::{IdentityRepository, LookupError};
pub use infra::postgres::PgIdentityRepository;
pub use metrics::AuthCallMetrics;
pub use presentation::router::{AppState, auth_router};
