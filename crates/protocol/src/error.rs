//! Error Codes - stable external authentication error set
//!
//! Defines the [`AuthErrorCode`] enum. The code strings are part of the
//! external contract: callers match on them, dashboards group by them, and
//! they must never change meaning between releases.

use serde::{Serialize, Serializer};

/// Module tag carried by every authentication error
const AUTHENTICATION: &str = "authentication";

/// Stable external error codes for authentication failures
///
/// Closed set, matched exhaustively. Each variant carries a stable code
/// string, the owning module tag, and a human-readable description.
///
/// ## Examples
/// ```rust
/// use protocol::AuthErrorCode;
///
/// let code = AuthErrorCode::BadPassword;
/// assert_eq!(code.code(), "ERR_BAD_PASSWORD");
/// assert_eq!(code.module(), "authentication");
/// assert!(!code.is_transient());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthErrorCode {
    /// The claimed system_id has no record in the identity store
    SystemIdUnknown,
    /// The originating address is not inside the identity's allow-list
    IpNotAllowed,
    /// The password does not match the stored hash
    BadPassword,
    /// The identity store could not be reached or failed unexpectedly
    StoreUnavailable,
    /// The record exists but lacks usable credentials
    CredentialsMissing,
}

impl AuthErrorCode {
    /// Every code, in declaration order. Used for reverse lookup and by
    /// tests that sweep the whole set.
    pub const ALL: [AuthErrorCode; 5] = [
        AuthErrorCode::SystemIdUnknown,
        AuthErrorCode::IpNotAllowed,
        AuthErrorCode::BadPassword,
        AuthErrorCode::StoreUnavailable,
        AuthErrorCode::CredentialsMissing,
    ];

    /// Stable external code string
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            AuthErrorCode::SystemIdUnknown => "ERR_SYSTEMID_UNKNOWN",
            AuthErrorCode::IpNotAllowed => "ERR_IP_NOT_ALLOWED",
            AuthErrorCode::BadPassword => "ERR_BAD_PASSWORD",
            AuthErrorCode::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            AuthErrorCode::CredentialsMissing => "ERR_CREDENTIALS_MISSING",
        }
    }

    /// Owning module tag
    #[inline]
    pub const fn module(&self) -> &'static str {
        AUTHENTICATION
    }

    /// Human-readable description
    #[inline]
    pub const fn description(&self) -> &'static str {
        match self {
            AuthErrorCode::SystemIdUnknown => "system_id does not exist",
            AuthErrorCode::IpNotAllowed => "ip address does not match the ip-allow-list",
            AuthErrorCode::BadPassword => "invalid password",
            AuthErrorCode::StoreUnavailable => "unable to reach the identity store",
            AuthErrorCode::CredentialsMissing => "necessary credentials are missing",
        }
    }

    /// Reverse lookup from a code string
    pub fn from_code(code: &str) -> Option<AuthErrorCode> {
        AuthErrorCode::ALL.into_iter().find(|e| e.code() == code)
    }

    /// Whether the condition is transient
    ///
    /// Only `StoreUnavailable` may be retried by the caller without
    /// changing the request; every other code is permanent for the given
    /// input.
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(self, AuthErrorCode::StoreUnavailable)
    }
}

impl std::fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for AuthErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
