//! In-memory user store adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{StoreError, UserStore};
use crate::domain::user::{LoginId, User};

/// User records held in process memory. Seeded at bootstrap.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    records: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `users`.
    pub fn seeded(users: Vec<User>) -> Self {
        Self {
            records: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_login(&self, login: &LoginId) -> Result<Option<User>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|user| &user.login == login).cloned())
    }

    async fn find_by_credentials(
        &self,
        login: &LoginId,
        passkey: &str,
    ) -> Result<Option<User>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|user| &user.login == login && user.passkey == passkey)
            .cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(raw: &str) -> LoginId {
        LoginId::new(raw).expect("valid login")
    }

    #[tokio::test]
    async fn finds_seeded_user_by_login() {
        let store = MemoryUserStore::seeded(vec![User::new(login("alice"), "Alice", "pk")]);
        let found = store.find_by_login(&login("alice")).await.expect("lookup");
        assert_eq!(found.map(|u| u.username), Some("Alice".to_owned()));
    }

    #[tokio::test]
    async fn credentials_must_match_both_fields() {
        let store = MemoryUserStore::seeded(vec![User::new(login("alice"), "Alice", "pk")]);
        assert!(store
            .find_by_credentials(&login("alice"), "pk")
            .await
            .expect("lookup")
            .is_some());
        assert!(store
            .find_by_credentials(&login("alice"), "wrong")
            .await
            .expect("lookup")
            .is_none());
        assert!(store
            .find_by_credentials(&login("bob"), "pk")
            .await
            .expect("lookup")
            .is_none());
    }

    #[tokio::test]
    async fn insert_makes_user_visible() {
        let store = MemoryUserStore::new();
        store
            .insert(&User::new(login("carol"), "Carol", "pk"))
            .await
            .expect("insert");
        assert!(store
            .find_by_login(&login("carol"))
            .await
            .expect("lookup")
            .is_some());
    }
}
