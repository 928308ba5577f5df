//! In-memory slot store adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{SlotStore, StoreError};
use crate::domain::slot::{Slot, SlotChanges};

/// Slot records held in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    records: RwLock<Vec<Slot>>,
}

impl MemorySlotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SlotStore for MemorySlotStore {
    async fn find_by_date(&self, date: &str) -> Result<Option<Slot>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|slot| slot.date == date).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|slot| slot.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Slot>, StoreError> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn insert(&self, slot: &Slot) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        records.push(slot.clone());
        Ok(())
    }

    async fn replace_by_date(&self, slot: &Slot) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|existing| existing.date == slot.date) {
            Some(existing) => {
                *existing = slot.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update(&self, id: &str, changes: &SlotChanges) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|slot| slot.id == id) {
            Some(slot) => Ok(slot.apply(changes)),
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|slot| slot.id != id);
        Ok(records.len() < before)
    }

    async fn find_latest(&self) -> Result<Option<Slot>, StoreError> {
        let records = self.records.read().await;
        // Insertion index breaks creation-timestamp ties.
        Ok(records
            .iter()
            .enumerate()
            .max_by_key(|(index, slot)| (slot.created_at, *index))
            .map(|(_, slot)| slot.clone()))
    }
}
