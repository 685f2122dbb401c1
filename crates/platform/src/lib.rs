//! Platform - cryptographic primitives shared across the workspace

pub mod password;
