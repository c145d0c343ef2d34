//! Axum route handlers for the Analytics API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::analytics::range::AnalyticsRange;
use crate::analytics::report::{build_report, AnalyticsReport};
use crate::analytics::streak::compute_streak;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::EntryStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    pub user_id: Uuid,
    pub range: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub streak: u32,
}

/// GET /api/v1/analytics
///
/// Aggregates the entries of the selected range. The streak always covers the
/// full history; if it cannot be loaded the report still succeeds with streak 0.
pub async fn handle_get_analytics(
    State(state): State<AppState>,
    Query(params): Query<AnalyticsQuery>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let range = AnalyticsRange::from_param(params.range.as_deref());
    let since = Utc::now() - Duration::days(range.days());

    let entries = state.entries.entries_since(params.user_id, since).await?;
    let streak = streak_or_zero(state.entries.as_ref(), params.user_id).await;

    debug!(
        "Analytics for user {}: {} entries in {} range",
        params.user_id,
        entries.len(),
        range.label()
    );

    Ok(Json(build_report(&entries, range, streak)))
}

/// GET /api/v1/analytics/streak
pub async fn handle_get_streak(
    State(state): State<AppState>,
    Query(params): Query<StreakQuery>,
) -> Result<Json<StreakResponse>, AppError> {
    let streak = load_streak(state.entries.as_ref(), params.user_id).await?;
    Ok(Json(StreakResponse { streak }))
}

async fn load_streak(store: &dyn EntryStore, user_id: Uuid) -> Result<u32, AppError> {
    let dates = store.entry_dates(user_id).await?;
    Ok(compute_streak(&dates, Utc::now().date_naive()))
}

async fn streak_or_zero(store: &dyn EntryStore, user_id: Uuid) -> u32 {
    match load_streak(store, user_id).await {
        Ok(streak) => streak,
        Err(e) => {
            warn!("Failed to load streak for user {user_id}, defaulting to 0: {e}");
            0
        }
    }
}
