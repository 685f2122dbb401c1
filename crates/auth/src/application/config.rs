//! Application Configuration

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Password pepper (optional, application-wide secret). Must match
    /// the pepper used when the credential was provisioned.
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
