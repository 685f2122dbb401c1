//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Session creation request
///
/// The originating address is taken from the connection, not the body.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub system_id: String,
    pub password: String,
}

/// Session creation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub system_id: String,
    pub session_id: String,
    pub customer_id: String,
}
