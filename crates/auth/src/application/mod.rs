//! Application Layer
//!
//! The authentication decision engine and its configuration.

pub mod authenticate;
pub mod config;

// Re-exports
pub use authenticate::AuthenticationEngine;
pub use config::AuthConfig;
