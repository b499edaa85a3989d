//! Wire DTOs for the portal auth endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON bodies field-for-field so serde can
//! stay derive-only and the transport layer never hand-builds JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name chosen at registration.
    pub username: String,
    /// Role tags attached by the server (e.g. `"ROLE_USER"`), display only.
    /// The field may be absent and defaults to empty.
    #[serde(default)]
    pub authorities: Vec<String>,
}

/// Request body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Server-side role identifier, already mapped from the UI selector.
    pub roles: String,
}

/// Optional message body carried by rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
