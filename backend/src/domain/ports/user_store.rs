//! Driven port for user record lookups.

use async_trait::async_trait;

use crate::domain::user::{LoginId, User};

use super::StoreError;

/// Read access to user records. Users are provisioned out-of-band, so the
/// only write is the seeding insert used at bootstrap and in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch a user by login identifier.
    async fn find_by_login(&self, login: &LoginId) -> Result<Option<User>, StoreError>;

    /// Fetch a user matching both login identifier and passkey.
    async fn find_by_credentials(
        &self,
        login: &LoginId,
        passkey: &str,
    ) -> Result<Option<User>, StoreError>;

    /// Insert a user record.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;
}
