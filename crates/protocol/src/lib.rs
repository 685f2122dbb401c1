//! Protocol Vocabulary - shared types between the gate and its callers
//!
//! This crate contains the "smallest core" of vocabulary the
//! authentication gate and the serving layer agree on:
//! - The stable external error-code set
//! - The request/response message types
//!
//! **Design Principle**: nothing in here depends on how authentication is
//! decided or where identities are stored. Callers can translate wire
//! errors using only this crate.

pub mod error;
pub mod messages;

pub use error::AuthErrorCode;
pub use messages::{
    AuthOutcome, AuthenticationRequest, AuthenticationResponse, UnsuccessfulResponse,
};
