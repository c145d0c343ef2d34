use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entry::{JournalEntry, NewJournalEntry};
use crate::models::user::{SettingsPatch, User};
use crate::store::{EntryStore, UserStore};

/// Postgres-backed store. Owns a clone of the pool; cloning the store is cheap.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for PgStore {
    async fn insert_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry, AppError> {
        let row = sqlx::query_as::<_, JournalEntry>(
            r#"
            INSERT INTO journal_entries
                (id, user_id, date, mood_score, emotions, text, tags,
                 energy_level, stress_level, sleep_quality, sleep_hours, steps)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.user_id)
        .bind(entry.date)
        .bind(entry.mood_score)
        .bind(&entry.emotions)
        .bind(&entry.text)
        .bind(&entry.tags)
        .bind(entry.energy_level)
        .bind(entry.stress_level)
        .bind(entry.sleep_quality)
        .bind(entry.sleep_hours)
        .bind(entry.steps)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_entry_error(e, entry.user_id))?;

        info!("Inserted journal entry {} for user {}", row.id, row.user_id);
        Ok(row)
    }

    async fn list_entries(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JournalEntry>, AppError> {
        Ok(sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT * FROM journal_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn latest_entry_on(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<JournalEntry>, AppError> {
        Ok(sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT * FROM journal_entries
            WHERE user_id = $1 AND date = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn entries_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<JournalEntry>, AppError> {
        Ok(sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT * FROM journal_entries
            WHERE user_id = $1 AND created_at >= $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn entry_dates(&self, user_id: Uuid) -> Result<Vec<NaiveDate>, AppError> {
        Ok(sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT date FROM journal_entries WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn all_entries(&self, user_id: Uuid) -> Result<Vec<JournalEntry>, AppError> {
        Ok(sqlx::query_as::<_, JournalEntry>(
            "SELECT * FROM journal_entries WHERE user_id = $1 ORDER BY date ASC, created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn update_settings(
        &self,
        user_id: Uuid,
        patch: SettingsPatch,
    ) -> Result<Option<User>, AppError> {
        let updated = sqlx::query_as::<_, User>(UPDATE_SETTINGS_SQL)
            .bind(user_id)
            .bind(patch.theme.as_deref())
            .bind(patch.daily_reminder)
            .bind(patch.weekly_insights)
            .bind(patch.coach_tips)
            .fetch_optional(&self.pool)
            .await?;

        if updated.is_some() {
            info!("Updated settings for user {user_id}");
        }
        Ok(updated)
    }
}

/// Single-statement patch: absent fields keep the row's current value, so
/// concurrent patches touching different fields never overwrite each other.
const UPDATE_SETTINGS_SQL: &str = r#"
    UPDATE users
    SET theme = COALESCE($2, theme),
        daily_reminder = COALESCE($3, daily_reminder),
        weekly_insights = COALESCE($4, weekly_insights),
        coach_tips = COALESCE($5, coach_tips),
        updated_at = NOW()
    WHERE id = $1
    RETURNING *
"#;

/// An entry for a user that does not exist trips the `user_id` foreign key.
fn insert_entry_error(err: sqlx::Error, user_id: Uuid) -> AppError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            return AppError::NotFound(format!("User {user_id} not found"));
        }
    }
    AppError::Database(err)
}
