//! Notes pad with an autosave indicator

use serde::{Deserialize, Serialize};

/// Autosave indicator shown next to the notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveStatus {
    Saved,
    #[serde(rename = "Saving...")]
    Saving,
}

/// Freeform notes draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesPad {
    pub text: String,
    pub status: SaveStatus,
    /// Bumped on every edit so a pending save can tell it is stale
    pub revision: u64,
}

impl NotesPad {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            status: SaveStatus::Saved,
            revision: 0,
        }
    }

    /// Replace the text and mark it as saving. Returns the new revision.
    pub fn edit(&mut self, text: String) -> u64 {
        self.text = text;
        self.status = SaveStatus::Saving;
        self.revision += 1;
        self.revision
    }

    /// Mark as saved if no edit happened since `revision`
    pub fn mark_saved(&mut self, revision: u64) -> bool {
        if self.revision != revision {
            return false;
        }
        self.status = SaveStatus::Saved;
        true
    }
}

impl Default for NotesPad {
    fn default() -> Self {
        Self::new()
    }
}
