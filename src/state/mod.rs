//! State management module
//! 
//! This module contains the dashboard widgets and the shared state that owns them.

pub mod app_state;
pub mod error;
pub mod notes_state;
pub mod quote_state;
pub mod task_store;
pub mod theme;
pub mod timer_state;

// Re-export main types
pub use app_state::{AddOutcome, AppState, TimerUpdate};
pub use error::StateError;
pub use notes_state::{NotesPad, SaveStatus};
pub use quote_state::{IndexPicker, Quote, QuoteBook};
pub use task_store::{Task, TaskId, TaskStore};
pub use theme::Theme;
pub use timer_state::{CountdownTimer, TimerMode, TimerSnapshot};
