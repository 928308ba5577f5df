//! In-memory booking store adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::booking::{Booking, BookingChanges};
use crate::domain::ports::{BookingStore, StoreError};
use crate::domain::user::LoginId;

/// Booking records held in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    records: RwLock<Vec<Booking>>,
}

impl MemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn find_for_login(
        &self,
        login: &LoginId,
        id: &str,
    ) -> Result<Option<Booking>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|booking| booking.id == id && &booking.user_login == login)
            .cloned())
    }

    async fn find_by_login_and_date(
        &self,
        login: &LoginId,
        date: &str,
    ) -> Result<Option<Booking>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|booking| &booking.user_login == login && booking.date == date)
            .cloned())
    }

    async fn find_by_date(&self, date: &str) -> Result<Option<Booking>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|booking| booking.date == date).cloned())
    }

    async fn list_for_login(&self, login: &LoginId) -> Result<Vec<Booking>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|booking| &booking.user_login == login)
            .cloned()
            .collect())
    }

    async fn insert(&self, booking: &Booking) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.push(booking.clone());
        Ok(())
    }

    async fn update_scoped(
        &self,
        login: &LoginId,
        id: &str,
        changes: &BookingChanges,
    ) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|booking| booking.id == id && &booking.user_login == login)
        {
            Some(booking) => Ok(booking.apply(changes)),
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|booking| booking.id != id);
        Ok(records.len() < before)
    }

    async fn find_latest(&self) -> Result<Option<Booking>, StoreError> {
        let records = self.records.read().await;
        // Insertion index breaks creation-timestamp ties.
        Ok(records
            .iter()
            .enumerate()
            .max_by_key(|(index, booking)| (booking.created_at, *index))
            .map(|(_, booking)| booking.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::BookingStatus;
    use crate::domain::user::User;

    fn login(raw: &str) -> LoginId {
        LoginId::new(raw).expect("valid login")
    }

    fn booking(id: &str, owner: &str, date: &str) -> Booking {
        let user = User::new(login(owner), owner.to_owned(), "pk");
        Booking::new(id.to_owned(), &user, date, BookingStatus::default())
    }

    #[tokio::test]
    async fn lookups_are_scoped_by_owning_login() {
        let store = MemoryBookingStore::new();
        store
            .insert(&booking("BKG0001", "alice", "2025-05-23"))
            .await
            .expect("insert");

        assert!(store
            .find_for_login(&login("alice"), "BKG0001")
            .await
            .expect("lookup")
            .is_some());
        assert!(store
            .find_for_login(&login("bob"), "BKG0001")
            .await
            .expect("lookup")
            .is_none());
    }

    #[tokio::test]
    async fn find_by_date_ignores_ownership() {
        let store = MemoryBookingStore::new();
        store
            .insert(&booking("BKG0001", "alice", "2025-05-23"))
            .await
            .expect("insert");

        assert!(store
            .find_by_date("2025-05-23")
            .await
            .expect("lookup")
            .is_some());
        assert!(store
            .find_by_date("2025-06-01")
            .await
            .expect("lookup")
            .is_none());
    }

    #[tokio::test]
    async fn list_for_login_filters_other_owners() {
        let store = MemoryBookingStore::new();
        store
            .insert(&booking("BKG0001", "alice", "2025-05-23"))
            .await
            .expect("insert");
        store
            .insert(&booking("BKG0002", "bob", "2025-05-24"))
            .await
            .expect("insert");

        let owned = store.list_for_login(&login("alice")).await.expect("list");
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].id, "BKG0001");
    }

    #[tokio::test]
    async fn update_scoped_misses_foreign_records() {
        let store = MemoryBookingStore::new();
        store
            .insert(&booking("BKG0001", "alice", "2025-05-23"))
            .await
            .expect("insert");

        let changes = BookingChanges {
            status: Some(BookingStatus::Cancelled),
            ..BookingChanges::default()
        };
        assert!(!store
            .update_scoped(&login("bob"), "BKG0001", &changes)
            .await
            .expect("update"));
        assert!(store
            .update_scoped(&login("alice"), "BKG0001", &changes)
            .await
            .expect("update"));
    }

    #[tokio::test]
    async fn find_latest_returns_most_recent_insert() {
        let store = MemoryBookingStore::new();
        store
            .insert(&booking("BKG0001", "alice", "2025-05-23"))
            .await
            .expect("insert");
        store
            .insert(&booking("BKG0002", "bob", "2025-05-24"))
            .await
            .expect("insert");

        let latest = store.find_latest().await.expect("latest");
        assert_eq!(latest.map(|b| b.id), Some("BKG0002".to_owned()));
    }
}
