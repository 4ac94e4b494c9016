//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod countdown_ticker;
pub mod notes_autosave;

// Re-export main functions
pub use countdown_ticker::countdown_ticker_task;
pub use notes_autosave::notes_autosave_task;
