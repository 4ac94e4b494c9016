//! Utility functions module
//! 
//! Process-level helpers shared by the binary and the library.

pub mod signals;

// Re-export main functions
pub use signals::shutdown_signal;
