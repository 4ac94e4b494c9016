//! Focus Board - A state-managed HTTP server for a productivity dashboard
//! 
//! This library holds the in-memory state behind a single-page dashboard: a
//! todo list, a pomodoro countdown, a notes pad with autosave status, a
//! rotating quote and a light/dark theme toggle.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
