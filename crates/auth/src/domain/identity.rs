//! Identity Entity
//!
//! A read-only credential record from the identity store. The engine never
//! writes identities; provisioning happens elsewhere.

use std::net::IpAddr;

use platform::password::HashedPassword;

use crate::domain::ip_allow_list::IpAllowList;
use crate::domain::repository::LookupError;

/// Identity record
///
/// Constructed only through [`Identity::from_record`], which rejects
/// incomplete data - no partially-built identities exist.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Unique key the caller claims
    pub system_id: String,
    /// Argon2id hash of the provisioned credential
    pub password_hash: HashedPassword,
    /// Tenant the identity belongs to, returned on success
    pub customer_id: String,
    /// Absent means unrestricted; present means restricted to these ranges
    pub ip_allow_list: Option<IpAllowList>,
}

impl Identity {
    /// Build an identity from raw store attributes
    ///
    /// `password_hash` and `customer_id` must both be present and
    /// non-empty, and the hash must be a parseable PHC string; otherwise
    /// the record is incomplete and yields [`LookupError::MissingFields`].
    pub fn from_record(
        system_id: String,
        password_hash: Option<String>,
        customer_id: Option<String>,
        ip_allow_list: Option<String>,
    ) -> Result<Self, LookupError> {
        let customer_id = match customer_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(LookupError::MissingFields),
        };

        let password_hash = match password_hash {
            Some(hash) if !hash.is_empty() => {
                HashedPassword::from_phc_string(hash).map_err(|_| LookupError::MissingFields)?
            }
            _ => return Err(LookupError::MissingFields),
        };

        Ok(Self {
            system_id,
            password_hash,
            customer_id,
            ip_allow_list: ip_allow_list.as_deref().map(IpAllowList::parse),
        })
    }

    /// Evaluate the allow-list against a request address
    ///
    /// No allow-list attribute means unrestricted: every request passes
    /// without the address even being parsed. With an attribute present
    /// the check fails closed: a malformed request address, or a list
    /// whose every entry failed to parse, rejects the request.
    pub fn permits_ip(&self, raw: &str) -> bool {
        let Some(allow_list) = &self.ip_allow_list else {
            return true;
        };

        match raw.parse::<IpAddr>() {
            Ok(ip) => allow_list.permits(ip),
            Err(_) => {
                tracing::warn!(ip = raw, "invalid IP address supplied in the request");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn phc(password: &str) -> String {
        HashedPassword::from_clear_text(&ClearTextPassword::from(password), None)
            .unwrap()
            .as_phc_string()
            .to_string()
    }

    #[test]
    fn test_from_record_complete() {
        let identity = Identity::from_record(
            "system_id".to_string(),
            Some(phc("secret")),
            Some("customer_id".to_string()),
            Some("1.2.3.4/32,1.2.3.5".to_string()),
        )
        .unwrap();

        assert_eq!(identity.system_id, "system_id");
        assert_eq!(identity.customer_id, "customer_id");
        assert_eq!(identity.ip_allow_list.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_from_record_missing_password_hash() {
        let result = Identity::from_record(
            "system_id".to_string(),
            None,
            Some("customer_id".to_string()),
            None,
        );
        assert!(matches!(result, Err(LookupError::MissingFields)));
    }

    #[test]
    fn test_from_record_missing_customer_id() {
        let result =
            Identity::from_record("system_id".to_string(), Some(phc("secret")), None, None);
        assert!(matches!(result, Err(LookupError::MissingFields)));
    }

    #[test]
    fn test_from_record_empty_fields_are_incomplete() {
        let result = Identity::from_record(
            "system_id".to_string(),
            Some(String::new()),
            Some("customer_id".to_string()),
            None,
        );
        assert!(matches!(result, Err(LookupError::MissingFields)));

        let result = Identity::from_record(
            "system_id".to_string(),
            Some(phc("secret")),
            Some(String::new()),
            None,
        );
        assert!(matches!(result, Err(LookupError::MissingFields)));
    }

    #[test]
    fn test_from_record_unparseable_hash_is_incomplete() {
        let result = Identity::from_record(
            "system_id".to_string(),
            Some("not_a_phc_hash".to_string()),
            Some("customer_id".to_string()),
            None,
        );
        assert!(matches!(result, Err(LookupError::MissingFields)));
    }

    #[test]
    fn test_no_allow_list_is_unrestricted() {
        let identity = Identity::from_record(
            "system_id".to_string(),
            Some(phc("secret")),
            Some("customer_id".to_string()),
            None,
        )
        .unwrap();

        assert!(identity.permits_ip("5.6.7.8"));
        assert!(identity.permits_ip("192.168.0.1"));
    }

    #[test]
    fn test_restricted_identity_checks_ranges() {
        let identity = Identity::from_record(
            "system_id".to_string(),
            Some(phc("secret")),
            Some("customer_id".to_string()),
            Some("10.0.0.0/24".to_string()),
        )
        .unwrap();

        assert!(identity.permits_ip("10.0.0.42"));
        assert!(!identity.permits_ip("10.0.1.5"));
    }

    #[test]
    fn test_malformed_request_ip_fails_closed() {
        let identity = Identity::from_record(
            "system_id".to_string(),
            Some(phc("secret")),
            Some("customer_id".to_string()),
            Some("10.0.0.0/24".to_string()),
        )
        .unwrap();

        assert!(!identity.permits_ip("incorrect"));
    }

    #[test]
    fn test_present_but_unusable_allow_list_denies_all() {
        // The attribute was present, so the identity is restricted even
        // though no entry parsed. Intentional asymmetry with the
        // attribute-absent case above.
        let identity = Identity::from_record(
            "system_id".to_string(),
            Some(phc("secret")),
            Some("customer_id".to_string()),
            Some("invalid_ip".to_string()),
        )
        .unwrap();

        assert!(identity.ip_allow_list.as_ref().unwrap().is_empty());
        assert!(!identity.permits_ip("1.2.3.4"));
    }
}
