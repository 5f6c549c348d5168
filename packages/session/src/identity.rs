//! The authenticated principal as the backend reports it.

use serde::{Deserialize, Serialize};

/// Access level attached to an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

/// Client-visible attributes of the logged-in account.
///
/// The backend is authoritative: the login and register responses are stored
/// verbatim and read back on hydration. Older accounts may arrive without a
/// `role`, which reads as [`Role::User`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}
