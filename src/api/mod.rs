//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/tasks", get(list_tasks_handler).post(add_task_handler))
        .route("/tasks/:id", delete(delete_task_handler))
        .route("/tasks/:id/toggle", post(toggle_task_handler))
        .route("/timer", get(timer_handler))
        .route("/timer/start", post(timer_start_handler))
        .route("/timer/pause", post(timer_pause_handler))
        .route("/timer/toggle", post(timer_toggle_handler))
        .route("/timer/reset", post(timer_reset_handler))
        .route("/timer/mode", post(timer_mode_handler))
        .route("/notes", get(notes_handler).put(edit_notes_handler))
        .route("/quote", get(quote_handler))
        .route("/quote/next", post(next_quote_handler))
        .route("/theme", get(theme_handler))
        .route("/theme/toggle", post(toggle_theme_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
