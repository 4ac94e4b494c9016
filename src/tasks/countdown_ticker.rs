//! Countdown ticker background task

use std::sync::Arc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that delivers one tick per interval while the timer runs.
///
/// The interval is rebuilt for every run, so a pause or mode switch drops the
/// pending tick and the next start waits a full period before its first tick.
pub async fn countdown_ticker_task(state: Arc<AppState>) {
    info!("Starting countdown ticker task");

    let mut timer_rx = state.timer_update_tx.subscribe();

    loop {
        // Wait until the timer is running
        let run = {
            let update = timer_rx.borrow_and_update();
            update.snapshot.is_running.then_some(update.run)
        };
        let Some(run) = run else {
            if timer_rx.changed().await.is_err() {
                debug!("Timer channel closed, stopping ticker");
                return;
            }
            continue;
        };

        debug!("Ticker armed for run {}", run);
        let period = state.tick_interval;
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                // Timer changed - stop ticking if it was paused, switched or restarted
                changed = timer_rx.changed() => {
                    if changed.is_err() {
                        debug!("Timer channel closed, stopping ticker");
                        return;
                    }
                    let same_run = {
                        let update = timer_rx.borrow_and_update();
                        update.snapshot.is_running && update.run == run
                    };
                    if !same_run {
                        debug!("Run {} ended, dropping pending tick", run);
                        break;
                    }
                }

                _ = interval.tick() => {
                    match state.tick_timer() {
                        Ok(snapshot) if snapshot.is_running => {}
                        Ok(snapshot) => {
                            info!("Countdown finished in {:?} mode", snapshot.mode);
                            break;
                        }
                        Err(e) => {
                            error!("Failed to tick timer: {}", e);
                            break;
                        }
                    }
                }
            }
        }
    }
}
