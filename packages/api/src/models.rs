//! # Wire models for the login exchange
//!
//! [`LoginCredentials`] is the request body sent to the login endpoint;
//! [`UserProfile`] is the client-safe profile the server returns inside the
//! response's `data` field. The profile carries only what the UI renders —
//! the session credential itself lives in the browser's cookie jar and is
//! never inspected here.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v1/users/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Profile of the logged-in user, as returned by the server on success.
///
/// Unknown fields in the payload are ignored and optional fields default,
/// so a minimal `{"id": 1, "name": "A"}` parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Name shown in the header, falling back to email when name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.email.as_deref().unwrap_or("Account")
        } else {
            &self.name
        }
    }
}
