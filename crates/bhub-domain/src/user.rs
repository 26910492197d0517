//! Authenticated user records kept in the session store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard role of an authenticated user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Organizer,
    #[default]
    Client,
}

impl UserRole {
    /// Roles a visitor may pick when registering.
    pub const SELF_SERVICE: [UserRole; 2] = [UserRole::Client, UserRole::Organizer];

    /// Clients only see their own bookings; other roles manage events.
    pub fn manages_events(self) -> bool {
        !matches!(self, UserRole::Client)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UserRole::Admin => "admin",
            UserRole::Organizer => "organizer",
            UserRole::Client => "client",
        };
        f.write_str(label)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "organizer" => Ok(UserRole::Organizer),
            "client" => Ok(UserRole::Client),
            other => Err(format!("unknown role `{other}`")),
        }
    }
}

/// The persisted `user -> {id, name, email, role}` record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl UserSession {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}
