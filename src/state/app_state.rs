//! Main application state management

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{
    error::lock, CountdownTimer, NotesPad, Quote, QuoteBook, StateError, Task, TaskId,
    TaskStore, Theme, TimerMode, TimerSnapshot,
};

/// Timer snapshot published to the ticker
#[derive(Debug, Clone, PartialEq)]
pub struct TimerUpdate {
    pub snapshot: TimerSnapshot,
    /// Incremented each time the timer goes from paused to running
    pub run: u64,
}

/// Result of a task add command
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub task: Option<Task>,
    pub completed: usize,
    pub total: usize,
}

/// Main application state holding every dashboard widget
#[derive(Debug)]
pub struct AppState {
    tasks: Mutex<TaskStore>,
    timer: Mutex<CountdownTimer>,
    timer_run: AtomicU64,
    notes: Mutex<NotesPad>,
    quotes: Mutex<QuoteBook>,
    theme: Mutex<Theme>,
    /// Background task timings
    pub tick_interval: Duration,
    pub save_delay: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerUpdate>,
    /// Channel carrying the latest notes revision
    pub notes_edit_tx: watch::Sender<u64>,
    /// Keep the receivers alive to prevent channel closure
    _timer_update_rx: watch::Receiver<TimerUpdate>,
    _notes_edit_rx: watch::Receiver<u64>,
}

impl AppState {
    /// Create a new AppState with a fresh dashboard
    pub fn new(port: u16, host: String, tick_interval: Duration, save_delay: Duration) -> Self {
        Self::with_widgets(
            port,
            host,
            tick_interval,
            save_delay,
            TaskStore::new(),
            QuoteBook::new(),
        )
    }

    /// Create a new AppState from preconfigured task and quote widgets
    pub fn with_widgets(
        port: u16,
        host: String,
        tick_interval: Duration,
        save_delay: Duration,
        tasks: TaskStore,
        quotes: QuoteBook,
    ) -> Self {
        let timer = CountdownTimer::new();
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerUpdate {
            snapshot: timer.snapshot(),
            run: 0,
        });
        let (notes_edit_tx, notes_edit_rx) = watch::channel(0);

        Self {
            tasks: Mutex::new(tasks),
            timer: Mutex::new(timer),
            timer_run: AtomicU64::new(0),
            notes: Mutex::new(NotesPad::new()),
            quotes: Mutex::new(quotes),
            theme: Mutex::new(Theme::default()),
            tick_interval,
            save_delay,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            timer_update_tx,
            notes_edit_tx,
            _timer_update_rx: timer_update_rx,
            _notes_edit_rx: notes_edit_rx,
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some((action.to_string(), Utc::now()));
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self.last_action.lock().ok().and_then(|a| a.clone()) {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }

    // Tasks

    /// Add a task; blank text is ignored
    pub fn add_task(&self, text: &str) -> Result<AddOutcome, StateError> {
        let mut tasks = lock(&self.tasks, "task")?;
        let task = tasks.add(text).and_then(|id| tasks.get(id).cloned());
        let outcome = AddOutcome {
            task,
            completed: tasks.completed_count(),
            total: tasks.total(),
        };
        drop(tasks);

        match &outcome.task {
            Some(task) => {
                info!("Added task {}: {}", task.id, task.text);
                self.record_action("task-add");
            }
            None => debug!("Rejected blank task"),
        }
        Ok(outcome)
    }

    /// Toggle a task; returns the updated task if it exists
    pub fn toggle_task(&self, id: TaskId) -> Result<Option<Task>, StateError> {
        let mut tasks = lock(&self.tasks, "task")?;
        if !tasks.toggle(id) {
            debug!("Toggle ignored for unknown task {}", id);
            return Ok(None);
        }
        let task = tasks.get(id).cloned();
        drop(tasks);

        info!("Toggled task {}", id);
        self.record_action("task-toggle");
        Ok(task)
    }

    /// Delete a task; returns whether it existed
    pub fn delete_task(&self, id: TaskId) -> Result<bool, StateError> {
        let removed = lock(&self.tasks, "task")?.delete(id);
        if removed {
            info!("Deleted task {}", id);
            self.record_action("task-delete");
        } else {
            debug!("Delete ignored for unknown task {}", id);
        }
        Ok(removed)
    }

    /// Ordered task list with completed and total counts
    pub fn get_tasks(&self) -> Result<(Vec<Task>, usize, usize), StateError> {
        let tasks = lock(&self.tasks, "task")?;
        Ok((tasks.tasks().to_vec(), tasks.completed_count(), tasks.total()))
    }

    // Timer

    /// Apply a timer transition and publish the result
    fn update_timer<F>(&self, action: Option<&str>, updater: F) -> Result<TimerSnapshot, StateError>
    where
        F: FnOnce(&mut CountdownTimer),
    {
        let mut timer = lock(&self.timer, "timer")?;
        let was_running = timer.is_running();
        updater(&mut *timer);
        if !was_running && timer.is_running() {
            self.timer_run.fetch_add(1, Ordering::SeqCst);
        }
        let snapshot = timer.snapshot();
        let run = self.timer_run.load(Ordering::SeqCst);

        // Notify timer watchers (the ticker) before releasing the lock so
        // updates are published in transition order
        if let Err(e) = self.timer_update_tx.send(TimerUpdate {
            snapshot: snapshot.clone(),
            run,
        }) {
            warn!("Failed to send timer update: {}", e);
        }
        drop(timer);

        if let Some(action) = action {
            self.record_action(action);
        }

        Ok(snapshot)
    }

    pub fn start_timer(&self) -> Result<TimerSnapshot, StateError> {
        let snapshot = self.update_timer(Some("timer-start"), |t| t.start())?;
        info!("Timer start requested: running={}, remaining={}s", snapshot.is_running, snapshot.remaining_seconds);
        Ok(snapshot)
    }

    pub fn pause_timer(&self) -> Result<TimerSnapshot, StateError> {
        let snapshot = self.update_timer(Some("timer-pause"), |t| t.pause())?;
        info!("Timer paused at {}", snapshot.display);
        Ok(snapshot)
    }

    pub fn toggle_timer(&self) -> Result<TimerSnapshot, StateError> {
        let snapshot = self.update_timer(Some("timer-toggle"), |t| t.toggle())?;
        info!("Timer toggled: running={}", snapshot.is_running);
        Ok(snapshot)
    }

    pub fn reset_timer(&self) -> Result<TimerSnapshot, StateError> {
        let snapshot = self.update_timer(Some("timer-reset"), |t| t.reset())?;
        info!("Timer reset to {}", snapshot.display);
        Ok(snapshot)
    }

    pub fn switch_timer_mode(&self, mode: TimerMode) -> Result<TimerSnapshot, StateError> {
        let snapshot = self.update_timer(Some("timer-mode"), |t| t.switch_mode(mode))?;
        info!("Timer switched to {:?} mode", mode);
        Ok(snapshot)
    }

    /// Advance the timer by one tick (called by the ticker)
    pub fn tick_timer(&self) -> Result<TimerSnapshot, StateError> {
        let snapshot = self.update_timer(None, |t| t.tick())?;
        debug!("Timer tick: {}", snapshot.display);
        Ok(snapshot)
    }

    pub fn get_timer(&self) -> Result<TimerSnapshot, StateError> {
        Ok(lock(&self.timer, "timer")?.snapshot())
    }

    // Notes

    /// Replace the notes text and notify the autosave task
    pub fn edit_notes(&self, text: String) -> Result<NotesPad, StateError> {
        let mut notes = lock(&self.notes, "notes")?;
        let revision = notes.edit(text);
        let current = notes.clone();
        if let Err(e) = self.notes_edit_tx.send(revision) {
            warn!("Failed to send notes edit notification: {}", e);
        }
        drop(notes);

        debug!("Notes edited, revision {}", revision);
        self.record_action("notes-edit");
        Ok(current)
    }

    /// Mark the notes saved if still at `revision` (called by the autosave task)
    pub fn mark_notes_saved(&self, revision: u64) -> Result<bool, StateError> {
        let saved = lock(&self.notes, "notes")?.mark_saved(revision);
        if saved {
            debug!("Notes saved at revision {}", revision);
        }
        Ok(saved)
    }

    pub fn get_notes(&self) -> Result<NotesPad, StateError> {
        Ok(lock(&self.notes, "notes")?.clone())
    }

    // Quotes

    pub fn next_quote(&self) -> Result<Quote, StateError> {
        let quote = lock(&self.quotes, "quote")?.next().clone();
        info!("New quote by {}", quote.author);
        self.record_action("quote-next");
        Ok(quote)
    }

    pub fn get_quote(&self) -> Result<Quote, StateError> {
        Ok(lock(&self.quotes, "quote")?.current().clone())
    }

    // Theme

    pub fn toggle_theme(&self) -> Result<Theme, StateError> {
        let mut theme = lock(&self.theme, "theme")?;
        *theme = theme.toggled();
        let current = *theme;
        drop(theme);

        info!("Theme switched to {:?}", current);
        self.record_action("theme-toggle");
        Ok(current)
    }

    pub fn get_theme(&self) -> Result<Theme, StateError> {
        Ok(*lock(&self.theme, "theme")?)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::with_widgets(
            0,
            "127.0.0.1".to_string(),
            Duration::from_secs(1),
            Duration::from_millis(800),
            TaskStore::new(),
            QuoteBook::with_picker(Box::new(|_| 1)),
        )
    }

    #[test]
    fn fresh_dashboard_defaults() {
        let state = AppState::new(20554, "0.0.0.0".to_string(), Duration::from_secs(1), Duration::from_millis(800));
        assert_eq!(state.get_tasks().unwrap().2, 0);
        assert_eq!(state.get_timer().unwrap().remaining_seconds, 1500);
        assert_eq!(state.get_theme().unwrap(), Theme::Light);
        assert_eq!(state.get_quote().unwrap().author, "Steve Jobs");
        assert_eq!(state.get_uptime(), "0s");
    }

    #[test]
    fn add_task_reports_counts() {
        let state = test_state();
        let outcome = state.add_task("Write report").unwrap();
        assert_eq!(outcome.task.unwrap().text, "Write report");
        assert_eq!((outcome.completed, outcome.total), (0, 1));

        let rejected = state.add_task("   ").unwrap();
        assert!(rejected.task.is_none());
        assert_eq!(rejected.total, 1);
    }

    #[test]
    fn unknown_task_ids_are_no_ops() {
        let state = test_state();
        assert!(state.toggle_task(TaskId::new(42)).unwrap().is_none());
        assert!(!state.delete_task(TaskId::new(42)).unwrap());
        assert_eq!(state.get_last_action().0, None);
    }

    #[test]
    fn starting_timer_bumps_run_once() {
        let state = test_state();
        state.start_timer().unwrap();
        state.start_timer().unwrap();
        assert_eq!(state.timer_update_tx.borrow().run, 1);

        state.pause_timer().unwrap();
        state.toggle_timer().unwrap();
        let update = state.timer_update_tx.borrow().clone();
        assert_eq!(update.run, 2);
        assert!(update.snapshot.is_running);
    }

    #[test]
    fn tick_publishes_snapshot_without_recording_action() {
        let state = test_state();
        state.start_timer().unwrap();
        let snapshot = state.tick_timer().unwrap();
        assert_eq!(snapshot.remaining_seconds, 1499);
        assert_eq!(state.timer_update_tx.borrow().snapshot, snapshot);
        assert_eq!(state.get_last_action().0.as_deref(), Some("timer-start"));
    }

    #[test]
    fn notes_edit_publishes_revision() {
        let state = test_state();
        state.edit_notes("draft".to_string()).unwrap();
        assert_eq!(*state.notes_edit_tx.borrow(), 1);
        assert!(state.mark_notes_saved(1).unwrap());
    }

    #[test]
    fn quote_and_theme() {
        let state = test_state();
        assert_eq!(state.next_quote().unwrap().author, "Steve Jobs");
        assert_eq!(state.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(state.get_theme().unwrap(), Theme::Dark);
    }
}
