//! Identity Store Trait
//!
//! Interface for the persistent identity store. Implementation is in the
//! infrastructure layer; tests use in-memory doubles.

use protocol::AuthErrorCode;
use thiserror::Error;

use crate::domain::identity::Identity;

/// Why a lookup produced no usable identity
///
/// The engine never sees transport-specific errors: anything unexpected
/// while querying collapses to `StoreUnavailable`.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// No record for the given key
    #[error("no identity record for the given system_id")]
    NotFound,

    /// Record exists but lacks usable credentials
    #[error("identity record is missing required credentials")]
    MissingFields,

    /// Transport/connectivity/unexpected failure while querying
    #[error("identity store unavailable: {0}")]
    StoreUnavailable(String),
}

impl LookupError {
    /// The stable external code this lookup failure surfaces as
    pub const fn error_code(&self) -> AuthErrorCode {
        match self {
            LookupError::NotFound => AuthErrorCode::SystemIdUnknown,
            LookupError::MissingFields => AuthErrorCode::CredentialsMissing,
            LookupError::StoreUnavailable(_) => AuthErrorCode::StoreUnavailable,
        }
    }
}

/// Identity store trait
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Fetch the single identity record for a system_id
    ///
    /// Exactly one record may exist per key (store-level uniqueness).
    async fn fetch(&self, system_id: &str) -> Result<Identity, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_to_code_mapping() {
        assert_eq!(
            LookupError::NotFound.error_code(),
            AuthErrorCode::SystemIdUnknown
        );
        assert_eq!(
            LookupError::MissingFields.error_code(),
            AuthErrorCode::CredentialsMissing
        );
        assert_eq!(
            LookupError::StoreUnavailable("timeout".to_string()).error_code(),
            AuthErrorCode::StoreUnavailable
        );
    }
}
