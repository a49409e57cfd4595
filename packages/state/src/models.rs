//! # Domain models for marketplace users
//!
//! A [`User`] only ever exists in memory. It is built from form input at login
//! or registration time and dropped on logout; nothing verifies it against a
//! server.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRole`] | Which side of the marketplace the user is on. Clients post jobs, workers browse them. |
//! | [`User`] | The signed-in user: `username`, `role` and `city`, exactly as entered. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Marketplace role chosen at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Client,
    Worker,
}

impl UserRole {
    /// Lowercase identifier: "client" or "worker".
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Worker => "worker",
        }
    }

    /// Capitalized label for buttons and badges.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Client => "Client",
            UserRole::Worker => "Worker",
        }
    }

    /// Only clients get the post-job affordances on the dashboard.
    pub fn can_post_jobs(&self) -> bool {
        matches!(self, UserRole::Client)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(UserRole::Client),
            "worker" => Ok(UserRole::Worker),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: UserRole,
    pub city: String,
}

impl User {
    pub fn new(username: impl Into<String>, role: UserRole, city: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role,
            city: city.into(),
        }
    }
}
