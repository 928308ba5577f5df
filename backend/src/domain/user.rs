//! User identity records.
//!
//! Users are provisioned out-of-band (seeded at bootstrap); the core only
//! reads them for credential lookup and existence checks.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by [`LoginId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginIdValidationError {
    /// The login identifier is empty once trimmed.
    #[error("login identifier must not be empty")]
    Empty,
}

/// Unique login identifier presented by API callers.
///
/// Stored trimmed of surrounding whitespace; must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoginId(String);

impl LoginId {
    /// Validate and construct a [`LoginId`].
    ///
    /// # Examples
    /// ```
    /// use backend::domain::LoginId;
    ///
    /// let login = LoginId::new("  alice ").expect("valid login");
    /// assert_eq!(login.as_ref(), "alice");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, LoginIdValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(LoginIdValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for LoginId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LoginId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<LoginId> for String {
    fn from(value: LoginId) -> Self {
        value.0
    }
}

impl TryFrom<String> for LoginId {
    type Error = LoginIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role attached to a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May manage slots in addition to bookings.
    Admin,
    /// Regular booking user.
    #[default]
    User,
    /// Read-only visitor; no extra rights in the current surface.
    Guest,
}

/// Stored user record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Internal reference captured on bookings.
    pub id: Uuid,
    /// Unique login identifier.
    pub login: LoginId,
    /// Display name.
    pub username: String,
    /// Shared secret presented in the `passkey` header.
    pub passkey: String,
    /// Contact address, when known.
    pub email: Option<String>,
    /// Role governing access to the slot management surface.
    pub role: UserRole,
    /// Inactive users cannot create bookings.
    pub active: bool,
}

impl User {
    /// Build an active user with the default role.
    pub fn new(login: LoginId, username: impl Into<String>, passkey: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            login,
            username: username.into(),
            passkey: passkey.into(),
            email: None,
            role: UserRole::default(),
            active: true,
        }
    }

    /// Assign a role.
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Assign a contact address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Mark the record inactive.
    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice", "alice")]
    #[case("  bob\t", "bob")]
    fn login_id_trims_input(#[case] raw: &str, #[case] expected: &str) {
        let login = LoginId::new(raw).expect("valid login");
        assert_eq!(login.as_ref(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn login_id_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(LoginId::new(raw), Err(LoginIdValidationError::Empty));
    }

    #[test]
    fn role_serialises_lowercase() {
        let value = serde_json::to_value(UserRole::Admin).expect("serialise role");
        assert_eq!(value, serde_json::json!("admin"));
    }

    #[test]
    fn role_defaults_to_user() {
        let user = User::new(LoginId::new("carol").expect("login"), "Carol", "pk");
        assert_eq!(user.role, UserRole::User);
        assert!(user.active);
    }
}
