//! Entry and user persistence behind traits.
//!
//! `AppState` carries `Arc<dyn EntryStore>` / `Arc<dyn UserStore>`; production wires
//! both to [`PgStore`], handler tests to the in-memory store.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entry::{JournalEntry, NewJournalEntry};
use crate::models::user::{SettingsPatch, User};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn insert_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry, AppError>;

    /// Newest first by `created_at`.
    async fn list_entries(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JournalEntry>, AppError>;

    /// Most recently created entry dated `date`, if any.
    async fn latest_entry_on(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<JournalEntry>, AppError>;

    /// Entries created at or after `since`, oldest first by `created_at`.
    async fn entries_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<JournalEntry>, AppError>;

    /// Distinct entry dates over the user's whole history, in no particular order.
    async fn entry_dates(&self, user_id: Uuid) -> Result<Vec<NaiveDate>, AppError>;

    /// Every entry for the user, oldest first.
    async fn all_entries(&self, user_id: Uuid) -> Result<Vec<JournalEntry>, AppError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, AppError>;

    /// Returns `None` when the user does not exist.
    async fn update_settings(
        &self,
        user_id: Uuid,
        patch: SettingsPatch,
    ) -> Result<Option<User>, AppError>;
}
