//! Infrastructure Layer
//!
//! Database implementation of the identity store.

pub mod postgres;

pub use postgres::PgIdentityRepository;
