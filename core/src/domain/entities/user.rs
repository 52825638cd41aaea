//! User entity representing a registered account in the Recipe API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse permission tier of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account, the default for every registration
    #[default]
    User,
    /// May manage the ingredient, cuisine and food type catalogs
    Admin,
}

impl Role {
    /// Stored representation of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// User entity representing a registered account
///
/// The password hash is never serialized so a `User` can't leak it through
/// an API response by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login email, unique across all accounts
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    /// Permission tier
    #[serde(default)]
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account with the default `user` role
    pub fn new(name: String, email: String, hashed_password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            hashed_password,
            role: Role::default(),
            created_at: Utc::now(),
        }
    }

    /// Returns the same account with a different role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Checks if the account holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Checks if the account is an administrator
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}
