use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{SettingsPatch, User};

/// Palette names the client knows how to render.
const THEMES: &[&str] = &["default", "male", "female"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub daily_reminder: bool,
    pub weekly_insights: bool,
    pub coach_tips: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub theme: String,
    pub notifications: NotificationSettings,
    pub data_export_enabled: bool,
}

impl From<User> for SettingsResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name.unwrap_or_default(),
            email: user.email,
            theme: user.theme,
            notifications: NotificationSettings {
                daily_reminder: user.daily_reminder,
                weekly_insights: user.weekly_insights,
                coach_tips: user.coach_tips,
            },
            data_export_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPatch {
    pub daily_reminder: Option<bool>,
    pub weekly_insights: Option<bool>,
    pub coach_tips: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub user_id: Uuid,
    pub theme: Option<String>,
    #[serde(default)]
    pub notifications: NotificationPatch,
}

pub fn validate_settings(req: UpdateSettingsRequest) -> Result<(Uuid, SettingsPatch), AppError> {
    let theme = match req.theme {
        Some(theme) => {
            let theme = theme.trim().to_lowercase();
            if !THEMES.contains(&theme.as_str()) {
                return Err(AppError::Validation(format!(
                    "theme must be one of: {}",
                    THEMES.join(", ")
                )));
            }
            Some(theme)
        }
        None => None,
    };

    Ok((
        req.user_id,
        SettingsPatch {
            theme,
            daily_reminder: req.notifications.daily_reminder,
            weekly_insights: req.notifications.weekly_insights,
            coach_tips: req.notifications.coach_tips,
        },
    ))
}
