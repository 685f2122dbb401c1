//! Domain Layer
//!
//! Contains the identity entity, the allow-list value object, and the
//! identity store trait.

pub mod identity;
pub mod ip_allow_list;
pub mod repository;

// Re-exports
pub use identity::Identity;
pub use ip_allow_list::IpAllowList;
pub use repository::{IdentityRepository, LookupError};
