//! In-memory document-store adapters.
//!
//! The persistent storage engine itself is an external collaborator; these
//! adapters realise the per-entity port capability set (find-one, find-many,
//! insert, update, delete, find-most-recent-by-creation) over guarded
//! in-process collections. Each port method locks, acts on a single record,
//! and releases — single-document atomicity only, matching the consistency
//! model the services are written against. They back both the binary and the
//! handler tests.

mod memory_booking_store;
mod memory_slot_store;
mod memory_user_store;

pub use memory_booking_store::MemoryBookingStore;
pub use memory_slot_store::MemorySlotStore;
pub use memory_user_store::MemoryUserStore;
