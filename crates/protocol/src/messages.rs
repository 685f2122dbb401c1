//! Authentication Messages
//!
//! Request/response value types exchanged with the engine. All of them are
//! transient: they exist for the duration of one `authenticate` call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthErrorCode;

/// The engine's tagged result: success or one fixed error code
pub type AuthOutcome = Result<AuthenticationResponse, UnsuccessfulResponse>;

/// One authentication attempt
///
/// `password` is plaintext and must never be persisted or logged; `Debug`
/// output is redacted.
#[derive(Clone, Deserialize)]
pub struct AuthenticationRequest {
    /// Claimed identity key
    pub system_id: String,
    /// Plaintext credential
    pub password: String,
    /// Originating address, dotted-decimal
    pub ip: String,
}

impl fmt::Debug for AuthenticationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationRequest")
            .field("system_id", &self.system_id)
            .field("password", &"[REDACTED]")
            .field("ip", &self.ip)
            .finish()
    }
}

/// Successful authentication result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationResponse {
    pub system_id: String,
    /// Freshly generated per call, never derived from request content
    pub session_id: String,
    pub customer_id: String,
}

/// Failed authentication result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsuccessfulResponse {
    pub error: AuthErrorCode,
}

impl UnsuccessfulResponse {
    pub const fn new(error: AuthErrorCode) -> Self {
        Self { error }
    }
}

impl Serialize for UnsuccessfulResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("UnsuccessfulResponse", 3)?;
        s.serialize_field("error", self.error.code())?;
        s.serialize_field("module", self.error.module())?;
        s.serialize_field("description", self.error.description())?;
        s.end()
    }
}

impl fmt::Display for UnsuccessfulResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.code(), self.error.description())
    }
}
