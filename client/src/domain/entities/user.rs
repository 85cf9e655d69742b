//! User domain types: roles, credentials, and the registration form model

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Account role
///
/// Owners may add restaurants and answer reviews; regular users browse and
/// review. Admin exists server-side and is passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Regular,
    Owner,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Regular => write!(f, "regular"),
            Role::Owner => write!(f, "owner"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(Role::Regular),
            "owner" => Ok(Role::Owner),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Login credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Data needed to register an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub is_owner: bool,
}

const PASSWORD_SPECIALS: &str = "!@#$%^&*()_-+<>?";

impl NewUser {
    /// Validate against the server's registration rules
    ///
    /// The password must be 8-64 characters and contain a lowercase letter,
    /// an uppercase letter, a digit, and a special character.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.chars().count() > 64 || !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }

        let len = self.password.chars().count();
        if len < 8 || len > 64 {
            return Err(ValidationError::Length {
                field: "password",
                min: 8,
                max: 64,
            });
        }

        let has_lower = self.password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = self.password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = self.password.chars().any(|c| c.is_ascii_digit());
        let has_special = self.password.chars().any(|c| PASSWORD_SPECIALS.contains(c));
        if !(has_lower && has_upper && has_digit && has_special) {
            return Err(ValidationError::PasswordTooWeak);
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(())
    }
}
