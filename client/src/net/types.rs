//! Wire DTOs shared by the auth endpoint, the session store and local storage.
//!
//! DESIGN
//! ======
//! `User::role` keeps the raw role string rather than `Role`: a persisted or
//! server-issued session may carry a role this build does not recognise, and
//! route guards must still be able to send that user home instead of failing
//! to decode the session.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::roles::Role;

/// An authenticated portal user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Wire role string (see [`Role::parse`]).
    pub role: String,
    /// Display name, if the server supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Typed role, or `None` for an unrecognised role string.
    pub fn known_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Name to show in chrome: display name, else email.
    pub fn label(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

/// Credentials collected by the login flow. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The `{ token, user }` pair written to local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: User,
}

/// Decoded reply from `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginReply {
    /// Server issued a session.
    Session { token: String, user: User },
    /// Server only told the client where to go; no session is established.
    Route { route: String },
}
