//! Driving port for header-credential authentication.
//!
//! Inbound adapters present the `loginid`/`passkey` header pair and receive
//! the resolved user without knowing the backing store. The gate is a boolean
//! decision in front of the core: it either yields the user or a single
//! rejection variant, never partial information about which check failed.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::{LoginId, User, UserRole};

use super::{StoreError, UserStore};

/// Failure raised by the credential gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// No user matched the presented credentials, or the matched user lacks
    /// the required role.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolve presented credentials to a user record.
#[async_trait]
pub trait CredentialGate: Send + Sync {
    /// Authenticate any user.
    async fn authenticate(&self, login: &LoginId, passkey: &str) -> Result<User, GateError>;

    /// Authenticate a user and require the admin role.
    async fn authenticate_admin(&self, login: &LoginId, passkey: &str) -> Result<User, GateError>;
}

/// Credential gate backed by a user store.
///
/// The admin check deliberately collapses "unknown credentials" and "known
/// user without the admin role" into the same rejection so the response does
/// not reveal which check failed.
#[derive(Debug)]
pub struct StoreCredentialGate<U> {
    users: Arc<U>,
}

impl<U> StoreCredentialGate<U> {
    /// Create a gate over the given user store.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U: UserStore> CredentialGate for StoreCredentialGate<U> {
    async fn authenticate(&self, login: &LoginId, passkey: &str) -> Result<User, GateError> {
        self.users
            .find_by_credentials(login, passkey)
            .await?
            .ok_or(GateError::InvalidCredentials)
    }

    async fn authenticate_admin(&self, login: &LoginId, passkey: &str) -> Result<User, GateError> {
        let user = self.authenticate(login, passkey).await?;
        if user.role != UserRole::Admin {
            return Err(GateError::InvalidCredentials);
        }
        Ok(user)
    }
}
