//! Pomodoro countdown state machine
//!
//! Transitions are pure: the timer never reads the clock. Time advances only
//! through [`CountdownTimer::tick`], which the background ticker drives.

use serde::{Deserialize, Serialize};

/// Countdown preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    /// Full duration of the preset in seconds
    pub fn total_seconds(self) -> u64 {
        match self {
            TimerMode::Work => 25 * 60,
            TimerMode::Break => 5 * 60,
        }
    }
}

/// Countdown timer with work and break modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    mode: TimerMode,
    remaining_seconds: u64,
    running: bool,
}

impl CountdownTimer {
    /// Create a paused timer at the full work duration
    pub fn new() -> Self {
        Self {
            mode: TimerMode::Work,
            remaining_seconds: TimerMode::Work.total_seconds(),
            running: false,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting down. No-op when nothing is left.
    pub fn start(&mut self) {
        if self.remaining_seconds > 0 {
            self.running = true;
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start when paused, pause when running
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance one second. Reaching zero pauses the timer.
    pub fn tick(&mut self) {
        if !self.running || self.remaining_seconds == 0 {
            return;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.running = false;
        }
    }

    /// Switch preset, refill and pause
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.mode = mode;
        self.remaining_seconds = mode.total_seconds();
        self.running = false;
    }

    /// Refill the current preset without touching the running flag
    pub fn reset(&mut self) {
        self.remaining_seconds = self.mode.total_seconds();
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }

    /// Elapsed share of the current preset, 0.0 to 100.0
    pub fn progress_percent(&self) -> f64 {
        let total = self.mode.total_seconds() as f64;
        100.0 - (self.remaining_seconds as f64 / total) * 100.0
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            is_running: self.running,
            display: self.display(),
            progress_percent: self.progress_percent(),
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the timer for clients and watchers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: TimerMode,
    pub remaining_seconds: u64,
    pub is_running: bool,
    pub display: String,
    pub progress_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_timer() -> CountdownTimer {
        let mut timer = CountdownTimer::new();
        timer.start();
        timer
    }

    #[test]
    fn starts_paused_at_full_work_duration() {
        let timer = CountdownTimer::new();
        assert_eq!(timer.mode(), TimerMode::Work);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(!timer.is_running());
    }

    #[test]
    fn full_work_cycle_auto_pauses_at_zero() {
        let mut timer = running_timer();
        for _ in 0..1500 {
            timer.tick();
        }
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.mode(), TimerMode::Work);

        timer.tick();
        assert_eq!(timer.remaining_seconds(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn start_at_zero_is_ignored() {
        let mut timer = running_timer();
        for _ in 0..1500 {
            timer.tick();
        }
        timer.start();
        assert!(!timer.is_running());
    }

    #[test]
    fn tick_while_paused_is_ignored() {
        let mut timer = CountdownTimer::new();
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn switch_to_break_from_any_state() {
        let mut fresh = CountdownTimer::new();
        let mut running = running_timer();
        running.tick();
        let mut drained = running_timer();
        for _ in 0..1500 {
            drained.tick();
        }

        for timer in [&mut fresh, &mut running, &mut drained] {
            timer.switch_mode(TimerMode::Break);
            assert_eq!(timer.mode(), TimerMode::Break);
            assert_eq!(timer.remaining_seconds(), 300);
            assert!(!timer.is_running());
        }
    }

    #[test]
    fn reset_keeps_running_flag() {
        let mut timer = running_timer();
        timer.tick();
        timer.tick();
        timer.reset();
        assert!(timer.is_running());
        assert_eq!(timer.remaining_seconds(), 1500);

        timer.switch_mode(TimerMode::Break);
        timer.tick();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_seconds(), 300);
    }

    #[test]
    fn toggle_alternates_start_and_pause() {
        let mut timer = CountdownTimer::new();
        timer.toggle();
        assert!(timer.is_running());
        timer.toggle();
        assert!(!timer.is_running());
    }

    #[test]
    fn display_and_progress() {
        let mut timer = CountdownTimer::new();
        assert_eq!(timer.display(), "25:00");
        assert_eq!(timer.progress_percent(), 0.0);

        timer.switch_mode(TimerMode::Break);
        timer.start();
        for _ in 0..150 {
            timer.tick();
        }
        assert_eq!(timer.display(), "02:30");
        assert!((timer.progress_percent() - 50.0).abs() < f64::EPSILON);
    }
}
