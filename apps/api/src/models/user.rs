use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub theme: String,
    pub daily_reminder: bool,
    pub weekly_insights: bool,
    pub coach_tips: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial settings update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub theme: Option<String>,
    pub daily_reminder: Option<bool>,
    pub weekly_insights: Option<bool>,
    pub coach_tips: Option<bool>,
}

impl SettingsPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(theme) = &self.theme {
            user.theme = theme.clone();
        }
        if let Some(v) = self.daily_reminder {
            user.daily_reminder = v;
        }
        if let Some(v) = self.weekly_insights {
            user.weekly_insights = v;
        }
        if let Some(v) = self.coach_tips {
            user.coach_tips = v;
        }
    }
}
