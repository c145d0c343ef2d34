//! Axum route handlers for user settings and export.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entry::JournalEntry;
use crate::models::user::User;
use crate::state::AppState;
use crate::users::settings::{validate_settings, SettingsResponse, UpdateSettingsRequest};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub user: User,
    pub journal_entries: Vec<JournalEntry>,
    pub exported_at: DateTime<Utc>,
}

/// GET /api/v1/users/settings
pub async fn handle_get_settings(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Json<SettingsResponse>, AppError> {
    let user = state
        .users
        .get_user(params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;
    Ok(Json(user.into()))
}

/// PATCH /api/v1/users/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    let (user_id, patch) = validate_settings(request)?;
    let user = state
        .users
        .update_settings(user_id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
    Ok(Json(user.into()))
}

/// GET /api/v1/users/export
///
/// Pretty-printed JSON download of the user's profile and every journal entry.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Response, AppError> {
    let user = state
        .users
        .get_user(params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))?;
    let journal_entries = state.entries.all_entries(params.user_id).await?;

    let exported_at = Utc::now();
    let document = ExportDocument {
        user,
        journal_entries,
        exported_at,
    };
    let body = serde_json::to_string_pretty(&document)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialise export: {e}")))?;

    info!(
        "Exported {} entries for user {}",
        document.journal_entries.len(),
        params.user_id
    );

    let disposition = format!(
        "attachment; filename=\"mood-data-{}.json\"",
        exported_at.format("%Y-%m-%d")
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
