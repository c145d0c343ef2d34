use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted journal entry. Column names are snake_case; the wire format is camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub mood_score: i32,
    /// Ordered; the first label is the primary emotion.
    pub emotions: Vec<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub energy_level: Option<i32>,
    pub stress_level: Option<i32>,
    pub sleep_quality: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub steps: Option<i32>,
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated values for a new entry, ready to be stored.
#[derive(Debug, Clone)]
pub struct NewJournalEntry {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub mood_score: i32,
    pub emotions: Vec<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub energy_level: Option<i32>,
    pub stress_level: Option<i32>,
    pub sleep_quality: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub steps: Option<i32>,
}

/// Client-facing view of an entry with the emotion list split into primary/secondary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub id: Uuid,
    pub date: NaiveDate,
    pub mood_score: i32,
    pub primary_emotion: Option<String>,
    pub secondary_emotions: Vec<String>,
    pub text: String,
    pub tags: Vec<String>,
    pub energy_level: Option<i32>,
    pub stress_level: Option<i32>,
    pub sleep_quality: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub steps: Option<i32>,
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<JournalEntry> for EntryView {
    fn from(entry: JournalEntry) -> Self {
        let mut emotions = entry.emotions.into_iter();
        let primary_emotion = emotions.next();
        Self {
            id: entry.id,
            date: entry.date,
            mood_score: entry.mood_score,
            primary_emotion,
            secondary_emotions: emotions.collect(),
            text: entry.text,
            tags: entry.tags,
            energy_level: entry.energy_level,
            stress_level: entry.stress_level,
            sleep_quality: entry.sleep_quality,
            sleep_hours: entry.sleep_hours,
            steps: entry.steps,
            ai_summary: entry.ai_summary,
            created_at: entry.created_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal entry for aggregation tests; `created_at` follows the date at noon.
    pub fn entry(date: &str, mood_score: i32, emotions: &[&str]) -> JournalEntry {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
        entry_on(date, mood_score, emotions)
    }

    pub fn entry_on(date: NaiveDate, mood_score: i32, emotions: &[&str]) -> JournalEntry {
        JournalEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date,
            mood_score,
            emotions: emotions.iter().map(|e| e.to_string()).collect(),
            text: "entry".to_string(),
            tags: vec![],
            energy_level: None,
            stress_level: None,
            sleep_quality: None,
            sleep_hours: None,
            steps: None,
            ai_summary: None,
            created_at: date
                .and_hms_opt(12, 0, 0)
                .expect("valid time")
                .and_utc(),
        }
    }
}
