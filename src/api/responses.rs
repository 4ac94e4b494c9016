//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{NotesPad, Quote, Task, Theme, TimerMode, TimerSnapshot};

pub const VERSION: &str = "1.0.0";

/// Body of POST /tasks
#[derive(Debug, Clone, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

/// Body of POST /timer/mode
#[derive(Debug, Clone, Deserialize)]
pub struct ModeRequest {
    pub mode: TimerMode,
}

/// Body of PUT /notes
#[derive(Debug, Clone, Deserialize)]
pub struct NotesRequest {
    pub text: String,
}

/// Ordered task list with counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
    pub completed: usize,
    pub total: usize,
}

/// Result of POST /tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTaskResponse {
    pub added: bool,
    pub task: Option<Task>,
    /// Input draft after submission, always cleared
    pub draft: String,
    pub completed: usize,
    pub total: usize,
}

/// Result of a timer command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerSnapshot,
}

impl TimerResponse {
    pub fn new(action: &str, timer: TimerSnapshot) -> Self {
        Self {
            action: action.to_string(),
            timestamp: Utc::now(),
            timer,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    pub is_dark: bool,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            theme,
            is_dark: theme.is_dark(),
        }
    }
}

/// Every widget at once, as the page renders it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub date: String,
    pub theme: ThemeResponse,
    pub timer: TimerSnapshot,
    pub tasks: TaskListResponse,
    pub notes: NotesPad,
    pub quote: Quote,
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: VERSION.to_string(),
        }
    }
}
