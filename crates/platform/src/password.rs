//! Password Hashing and Verification
//!
//! Argon2id (memory-hard, adaptive) hashing with:
//! - Zeroization of plaintext material
//! - Constant-time comparison
//! - Optional pepper (application-wide secret)
//!
//! The gate only verifies credentials that were provisioned elsewhere, so
//! no password policy is enforced here. Hashing is exposed for tests and
//! provisioning tooling.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Password bytes with the pepper appended, when one is configured
    fn peppered(&self, pepper: Option<&[u8]>) -> Vec<u8> {
        match pepper {
            Some(p) => {
                let mut combined = self.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => self.as_bytes().to_vec(),
        }
    }
}

impl From<&str> for ClearTextPassword {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// Stores the Argon2id hash in PHC format (algorithm identifier, version,
/// parameters, salt, hash). Safe to store and log.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., loaded from the identity store)
    ///
    /// ## Errors
    /// `InvalidHashFormat` if the string is not a parseable PHC hash.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Hash a clear text password with Argon2id
    ///
    /// ## Arguments
    /// * `clear` - The plaintext to hash
    /// * `pepper` - Optional application-wide secret
    pub fn from_clear_text(
        clear: &ClearTextPassword,
        pepper: Option<&[u8]>,
    ) -> Result<Self, PasswordHashError> {
        let password_bytes = clear.peppered(pepper);

        // Random 128-bit salt per hash
        let salt = SaltString::generate(OsRng);

        // OWASP recommended Argon2id parameters:
        // m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Argon2 recomputes and compares in constant time, so the result does
    /// not leak how much of the input matched. Any malformed input yields
    /// `false` rather than an error.
    ///
    /// ## Arguments
    /// * `clear` - The clear text password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, clear: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = clear.peppered(pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let argon2 = Argon2::default();

        argon2
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::from("TestPassword123!");
        let hashed = HashedPassword::from_clear_text(&password, None).unwrap();

        // Correct password should verify
        assert!(hashed.verify(&password, None));

        // Wrong password should not verify
        let wrong_password = ClearTextPassword::from("WrongPassword123!");
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::from("TestPassword123!");
        let pepper = b"my_secret_pepper";
        let hashed = HashedPassword::from_clear_text(&password, Some(pepper)).unwrap();

        // Correct password with correct pepper
        assert!(hashed.verify(&password, Some(pepper)));

        // Correct password without pepper should fail
        assert!(!hashed.verify(&password, None));

        // Correct password with wrong pepper should fail
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::from("TestPassword123!");
        let hashed = HashedPassword::from_clear_text(&password, None).unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_distinct_salts() {
        let password = ClearTextPassword::from("TestPassword123!");
        let a = HashedPassword::from_clear_text(&password, None).unwrap();
        let b = HashedPassword::from_clear_text(&password, None).unwrap();

        assert_ne!(a.as_phc_string(), b.as_phc_string());
        assert!(a.verify(&password, None));
        assert!(b.verify(&password, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::from("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = HashedPassword::from_clear_text(&password, None).unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(debug_output.contains("HASH"));
    }
}
