//! Notes autosave background task

use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Background task that flips the notes status back to saved once edits
/// have been quiet for the configured delay. Every edit restarts the wait.
pub async fn notes_autosave_task(state: Arc<AppState>) {
    info!("Starting notes autosave task");

    let mut edits_rx = state.notes_edit_tx.subscribe();
    // Pick up edits made before this task first ran
    edits_rx.mark_changed();

    loop {
        if edits_rx.changed().await.is_err() {
            debug!("Notes channel closed, stopping autosave");
            return;
        }

        loop {
            let revision = *edits_rx.borrow_and_update();

            tokio::select! {
                changed = edits_rx.changed() => {
                    if changed.is_err() {
                        debug!("Notes channel closed, stopping autosave");
                        return;
                    }
                    // Newer edit, restart the wait
                    continue;
                }
                _ = sleep(state.save_delay) => {
                    if let Err(e) = state.mark_notes_saved(revision) {
                        warn!("Failed to mark notes saved: {}", e);
                    }
                    break;
                }
            }
        }
    }
}
