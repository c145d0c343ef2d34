//! Axum route handlers for the Entries API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entries::validation::{validate_entry, CreateEntryRequest};
use crate::errors::AppError;
use crate::models::entry::EntryView;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntriesQuery {
    pub user_id: Uuid,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry: Option<EntryView>,
}

/// GET /api/v1/entries
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Query(params): Query<ListEntriesQuery>,
) -> Result<Json<EntriesResponse>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = params.offset.unwrap_or(0);
    if !(1..=MAX_PAGE_SIZE).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    if offset < 0 {
        return Err(AppError::Validation("offset cannot be negative".to_string()));
    }

    let rows = state
        .entries
        .list_entries(params.user_id, limit, offset)
        .await?;
    Ok(Json(EntriesResponse {
        entries: rows.into_iter().map(EntryView::from).collect(),
    }))
}

/// POST /api/v1/entries
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let new_entry = validate_entry(request)?;
    let row = state.entries.insert_entry(new_entry).await?;
    Ok(Json(EntryResponse {
        entry: Some(row.into()),
    }))
}

/// GET /api/v1/entries/today
///
/// Returns the latest entry dated today (UTC), or `{"entry": null}`.
pub async fn handle_today_entry(
    State(state): State<AppState>,
    Query(params): Query<TodayQuery>,
) -> Result<Json<EntryResponse>, AppError> {
    let today = Utc::now().date_naive();
    let row = state.entries.latest_entry_on(params.user_id, today).await?;
    Ok(Json(EntryResponse {
        entry: row.map(EntryView::from),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::models::entry::fixtures::entry_on;
    use crate::routes::build_router;
    use crate::state::AppState;
    use crate::store::memory::MemoryStore;

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/entries")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: String) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_fetch_today() {
        let store = Arc::new(MemoryStore::default());
        let state = AppState::for_store(store);
        let user = Uuid::new_v4();
        let today = Utc::now().date_naive();

        let (status, created) = send(
            state.clone(),
            post(json!({
                "userId": user,
                "moodScore": 7,
                "primaryEmotion": "Joy",
                "secondaryEmotions": ["Calm"],
                "text": "Lunch with an old friend",
                "date": today.to_string(),
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["entry"]["primaryEmotion"], "Joy");
        assert_eq!(created["entry"]["secondaryEmotions"], json!(["Calm"]));

        let (status, fetched) = send(state, get(format!("/api/v1/entries/today?userId={user}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["entry"]["id"], created["entry"]["id"]);
        assert_eq!(fetched["entry"]["moodScore"], 7);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_mood() {
        let state = AppState::for_store(Arc::new(MemoryStore::default()));
        let (status, body) = send(
            state,
            post(json!({
                "userId": Uuid::new_v4(),
                "moodScore": 42,
                "text": "??",
                "date": "2024-05-01",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_today_without_entry_is_null() {
        let user = Uuid::new_v4();
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        let mut old = entry_on(yesterday, 5, &[]);
        old.user_id = user;
        let state = AppState::for_store(Arc::new(MemoryStore::with_entries(vec![old])));

        let (status, body) = send(state, get(format!("/api/v1/entries/today?userId={user}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entry"], Value::Null);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_paged() {
        let user = Uuid::new_v4();
        let base = Utc::now().date_naive();
        let entries = (0..5)
            .map(|d| {
                let mut e = entry_on(base - Duration::days(d), (d + 1) as i32, &[]);
                e.user_id = user;
                e
            })
            .collect();
        let state = AppState::for_store(Arc::new(MemoryStore::with_entries(entries)));

        let (status, body) = send(
            state.clone(),
            get(format!("/api/v1/entries?userId={user}&limit=2&offset=1")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let moods: Vec<_> = body["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["moodScore"].as_i64().unwrap())
            .collect();
        assert_eq!(moods, vec![2, 3]);

        let (status, _) = send(state, get(format!("/api/v1/entries?userId={user}&limit=0"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
