//! In-memory store used by handler tests.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entry::{JournalEntry, NewJournalEntry};
use crate::models::user::{SettingsPatch, User};
use crate::store::{EntryStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<JournalEntry>>,
    users: Mutex<Vec<User>>,
    fail_entry_dates: AtomicBool,
}

impl MemoryStore {
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// Makes `entry_dates` fail, simulating an unavailable streak lookup.
    pub fn fail_entry_dates(&self) {
        self.fail_entry_dates.store(true, Ordering::SeqCst);
    }

    fn user_entries(&self, user_id: Uuid) -> Vec<JournalEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn insert_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry, AppError> {
        let row = JournalEntry {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            date: entry.date,
            mood_score: entry.mood_score,
            emotions: entry.emotions,
            text: entry.text,
            tags: entry.tags,
            energy_level: entry.energy_level,
            stress_level: entry.stress_level,
            sleep_quality: entry.sleep_quality,
            sleep_hours: entry.sleep_hours,
            steps: entry.steps,
            ai_summary: None,
            created_at: Utc::now(),
        };
        self.entries.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_entries(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JournalEntry>, AppError> {
        let mut rows = self.user_entries(user_id);
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn latest_entry_on(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<JournalEntry>, AppError> {
        Ok(self
            .user_entries(user_id)
            .into_iter()
            .filter(|e| e.date == date)
            .max_by_key(|e| e.created_at))
    }

    async fn entries_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<JournalEntry>, AppError> {
        let mut rows: Vec<_> = self
            .user_entries(user_id)
            .into_iter()
            .filter(|e| e.created_at >= since)
            .collect();
        rows.sort_by_key(|e| e.created_at);
        Ok(rows)
    }

    async fn entry_dates(&self, user_id: Uuid) -> Result<Vec<NaiveDate>, AppError> {
        if self.fail_entry_dates.load(Ordering::SeqCst) {
            return Err(AppError::Internal(anyhow::anyhow!("entry dates unavailable")));
        }
        let dates: BTreeSet<_> = self.user_entries(user_id).iter().map(|e| e.date).collect();
        Ok(dates.into_iter().collect())
    }

    async fn all_entries(&self, user_id: Uuid) -> Result<Vec<JournalEntry>, AppError> {
        let mut rows = self.user_entries(user_id);
        rows.sort_by_key(|e| (e.date, e.created_at));
        Ok(rows)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn update_settings(
        &self,
        user_id: Uuid,
        patch: SettingsPatch,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == user_id) else {
            return Ok(None);
        };
        patch.apply(user);
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }
}

pub fn test_user(id: Uuid) -> User {
    let now = Utc::now();
    User {
        id,
        email: "sam@example.com".to_string(),
        name: Some("Sam".to_string()),
        theme: "default".to_string(),
        daily_reminder: true,
        weekly_insights: false,
        coach_tips: false,
        created_at: now,
        updated_at: now,
    }
}
