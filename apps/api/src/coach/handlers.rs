//! Axum route handlers for the Coach API.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use chrono::{Duration, Utc};
use futures_util::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::coach::crisis::{detect_crisis, CRISIS_SUPPORT_MESSAGE};
use crate::coach::prompts::{build_prompt, build_system_prompt, ChatMessage, CoachingContext};
use crate::coach::reflection::{affirmation, insight};
use crate::coach::CoachModel;
use crate::errors::AppError;
use crate::state::AppState;

/// Days of journal history summarised into the coach's system prompt.
const CONTEXT_DAYS: i64 = 7;
/// Days of journal history behind a reflection.
const REFLECTION_DAYS: i64 = 14;
const NEUTRAL_MOOD: i32 = 5;
const CHANNEL_CAPACITY: usize = 32;

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble responding right now. Please try again in a moment.";
pub const DONE_MARKER: &str = "[DONE]";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    /// When present, recent entries personalise the system prompt.
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ReflectionResponse {
    pub insight: String,
    pub affirmation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/coach
///
/// Streams the coach's reply as server-sent events: `data: {"content": ...}` per
/// chunk, then `data: [DONE]`. Model failures become a fallback chunk, never a
/// broken stream. A client disconnect drops the upstream request.
pub async fn handle_coach(
    State(state): State<AppState>,
    Json(request): Json<CoachRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let model = state
        .coach
        .clone()
        .ok_or_else(|| AppError::Llm("AI service is not configured".to_string()))?;

    let context = match request.user_id {
        Some(user_id) => {
            let since = Utc::now() - Duration::days(CONTEXT_DAYS);
            let entries = state.entries.entries_since(user_id, since).await?;
            CoachingContext::from_entries(&entries)
        }
        None => None,
    };

    let crisis = detect_crisis(message);
    if crisis {
        warn!("Crisis keywords detected in coach message; sending support resources");
    }

    let system = build_system_prompt(context.as_ref());
    let prompt = build_prompt(message, &request.history);

    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    tokio::spawn(relay_reply(model, system, prompt, crisis, tx));

    let events = stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|event| (Ok::<_, Infallible>(event), rx))
    });

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// GET /api/v1/coach/reflection
///
/// One insight sentence about the last two weeks plus an affirmation matched to
/// the most recent mood.
pub async fn handle_reflection(
    State(state): State<AppState>,
    Query(params): Query<ReflectionQuery>,
) -> Result<Json<ReflectionResponse>, AppError> {
    let since = Utc::now() - Duration::days(REFLECTION_DAYS);
    let mut entries = state.entries.entries_since(params.user_id, since).await?;
    entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));

    let moods: Vec<i32> = entries.iter().map(|e| e.mood_score).collect();
    let emotions: Vec<String> = entries
        .iter()
        .flat_map(|e| e.emotions.iter().cloned())
        .collect();
    let latest_mood = moods.last().copied().unwrap_or(NEUTRAL_MOOD);

    let mut rng = rand::thread_rng();
    Ok(Json(ReflectionResponse {
        insight: insight(&moods, &emotions, &mut rng).to_string(),
        affirmation: affirmation(latest_mood, &mut rng).to_string(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Streaming relay
// ────────────────────────────────────────────────────────────────────────────

async fn relay_reply(
    model: Arc<dyn CoachModel>,
    system: String,
    prompt: String,
    crisis: bool,
    tx: mpsc::Sender<Event>,
) {
    if crisis && tx.send(crisis_event()).await.is_err() {
        return;
    }

    let opened = tokio::select! {
        _ = tx.closed() => {
            debug!("Coach client disconnected before the reply started");
            return;
        }
        opened = model.stream_reply(&system, &prompt) => opened,
    };

    match opened {
        Ok(mut chunks) => loop {
            let chunk = tokio::select! {
                _ = tx.closed() => {
                    debug!("Coach client disconnected, cancelling reply");
                    return;
                }
                chunk = chunks.next() => chunk,
            };
            match chunk {
                None => break,
                Some(Ok(text)) if text.is_empty() => continue,
                Some(Ok(text)) => {
                    if tx.send(content_event(&text)).await.is_err() {
                        debug!("Coach client disconnected, cancelling reply");
                        return;
                    }
                }
                Some(Err(e)) => {
                    error!("Coach stream failed mid-reply: {e}");
                    let _ = tx.send(content_event(FALLBACK_REPLY)).await;
                    break;
                }
            }
        },
        Err(e) => {
            error!("Coach model request failed: {e}");
            let _ = tx.send(content_event(FALLBACK_REPLY)).await;
        }
    }

    let _ = tx.send(Event::default().data(DONE_MARKER)).await;
}

fn content_event(content: &str) -> Event {
    Event::default().data(json!({ "content": content }).to_string())
}

fn crisis_event() -> Event {
    Event::default().data(json!({ "content": CRISIS_SUPPORT_MESSAGE, "crisis": true }).to_string())
}
