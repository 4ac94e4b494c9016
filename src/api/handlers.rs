//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use tracing::{error, info};

use crate::state::{AppState, NotesPad, Quote, StateError, Task, TaskId, TimerSnapshot};
use super::responses::{
    AddTaskRequest, AddTaskResponse, DashboardResponse, HealthResponse, ModeRequest,
    NotesRequest, StatusResponse, TaskListResponse, ThemeResponse, TimerResponse,
};

type HandlerResult<T> = Result<Json<T>, StatusCode>;

fn internal_error(context: &str, e: StateError) -> StatusCode {
    error!("Failed to {}: {}", context, e);
    StatusCode::INTERNAL_SERVER_ERROR
}

fn task_list(state: &AppState) -> Result<TaskListResponse, StateError> {
    let (tasks, completed, total) = state.get_tasks()?;
    Ok(TaskListResponse { tasks, completed, total })
}

/// Handle GET /dashboard - Snapshot of every widget
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> HandlerResult<DashboardResponse> {
    let snapshot = || -> Result<DashboardResponse, StateError> {
        Ok(DashboardResponse {
            date: Local::now().date_naive().to_string(),
            theme: state.get_theme()?.into(),
            timer: state.get_timer()?,
            tasks: task_list(&state)?,
            notes: state.get_notes()?,
            quote: state.get_quote()?,
        })
    };
    snapshot().map(Json).map_err(|e| internal_error("build dashboard", e))
}

/// Handle GET /tasks - Ordered task list
pub async fn list_tasks_handler(State(state): State<Arc<AppState>>) -> HandlerResult<TaskListResponse> {
    task_list(&state)
        .map(Json)
        .map_err(|e| internal_error("list tasks", e))
}

/// Handle POST /tasks - Add a task; blank text is accepted but ignored
pub async fn add_task_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddTaskRequest>,
) -> Result<(StatusCode, Json<AddTaskResponse>), StatusCode> {
    let outcome = state
        .add_task(&request.text)
        .map_err(|e| internal_error("add task", e))?;

    let status = if outcome.task.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        status,
        Json(AddTaskResponse {
            added: outcome.task.is_some(),
            task: outcome.task,
            draft: String::new(),
            completed: outcome.completed,
            total: outcome.total,
        }),
    ))
}

/// Handle POST /tasks/:id/toggle - Flip a task's completed flag
pub async fn toggle_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> HandlerResult<Task> {
    match state.toggle_task(TaskId::new(id)) {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error("toggle task", e)),
    }
}

/// Handle DELETE /tasks/:id - Remove a task
pub async fn delete_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> HandlerResult<TaskListResponse> {
    match state.delete_task(TaskId::new(id)) {
        Ok(true) => task_list(&state)
            .map(Json)
            .map_err(|e| internal_error("list tasks", e)),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error("delete task", e)),
    }
}

fn timer_response(
    action: &str,
    result: Result<TimerSnapshot, StateError>,
) -> HandlerResult<TimerResponse> {
    match result {
        Ok(timer) => Ok(Json(TimerResponse::new(action, timer))),
        Err(e) => Err(internal_error(&format!("{} timer", action), e)),
    }
}

/// Handle GET /timer - Current countdown
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> HandlerResult<TimerSnapshot> {
    state
        .get_timer()
        .map(Json)
        .map_err(|e| internal_error("read timer", e))
}

/// Handle POST /timer/start
pub async fn timer_start_handler(State(state): State<Arc<AppState>>) -> HandlerResult<TimerResponse> {
    timer_response("start", state.start_timer())
}

/// Handle POST /timer/pause
pub async fn timer_pause_handler(State(state): State<Arc<AppState>>) -> HandlerResult<TimerResponse> {
    timer_response("pause", state.pause_timer())
}

/// Handle POST /timer/toggle - Start/Pause button
pub async fn timer_toggle_handler(State(state): State<Arc<AppState>>) -> HandlerResult<TimerResponse> {
    timer_response("toggle", state.toggle_timer())
}

/// Handle POST /timer/reset
pub async fn timer_reset_handler(State(state): State<Arc<AppState>>) -> HandlerResult<TimerResponse> {
    timer_response("reset", state.reset_timer())
}

/// Handle POST /timer/mode - Switch between focus and break
pub async fn timer_mode_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ModeRequest>,
) -> HandlerResult<TimerResponse> {
    timer_response("switch", state.switch_timer_mode(request.mode))
}

/// Handle GET /notes
pub async fn notes_handler(State(state): State<Arc<AppState>>) -> HandlerResult<NotesPad> {
    state
        .get_notes()
        .map(Json)
        .map_err(|e| internal_error("read notes", e))
}

/// Handle PUT /notes - Replace the draft and schedule an autosave
pub async fn edit_notes_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NotesRequest>,
) -> HandlerResult<NotesPad> {
    state
        .edit_notes(request.text)
        .map(Json)
        .map_err(|e| internal_error("edit notes", e))
}

/// Handle GET /quote
pub async fn quote_handler(State(state): State<Arc<AppState>>) -> HandlerResult<Quote> {
    state
        .get_quote()
        .map(Json)
        .map_err(|e| internal_error("read quote", e))
}

/// Handle POST /quote/next - Pick a new quote
pub async fn next_quote_handler(State(state): State<Arc<AppState>>) -> HandlerResult<Quote> {
    state
        .next_quote()
        .map(Json)
        .map_err(|e| internal_error("pick quote", e))
}

/// Handle GET /theme
pub async fn theme_handler(State(state): State<Arc<AppState>>) -> HandlerResult<ThemeResponse> {
    state
        .get_theme()
        .map(|theme| Json(ThemeResponse::from(theme)))
        .map_err(|e| internal_error("read theme", e))
}

/// Handle POST /theme/toggle
pub async fn toggle_theme_handler(State(state): State<Arc<AppState>>) -> HandlerResult<ThemeResponse> {
    state
        .toggle_theme()
        .map(|theme| Json(ThemeResponse::from(theme)))
        .map_err(|e| internal_error("toggle theme", e))
}

/// Handle GET /status - Server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check
pub async fn health_handler() -> Json<HealthResponse> {
    info!("Health check requested");
    Json(HealthResponse::ok())
}
