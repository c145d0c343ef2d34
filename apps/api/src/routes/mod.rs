pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::coach::handlers as coach;
use crate::entries::handlers as entries;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Entries API
        .route(
            "/api/v1/entries",
            get(entries::handle_list_entries).post(entries::handle_create_entry),
        )
        .route("/api/v1/entries/today", get(entries::handle_today_entry))
        // Analytics API
        .route("/api/v1/analytics", get(analytics::handle_get_analytics))
        .route("/api/v1/analytics/streak", get(analytics::handle_get_streak))
        // Coach API
        .route("/api/v1/coach", post(coach::handle_coach))
        .route("/api/v1/coach/reflection", get(coach::handle_reflection))
        // User API
        .route(
            "/api/v1/users/settings",
            get(users::handle_get_settings).patch(users::handle_update_settings),
        )
        .route("/api/v1/users/export", get(users::handle_export))
        .with_state(state)
}
