/// Auto-generation scheduling — one timer task, channel signaling.
///
/// The timer task never touches the generator or any display state: it
/// emits `DeskEvent::AutoTick` over an mpsc channel and the foreground
/// performs the actual generation. Settings reach the task through a
/// `watch` channel, which is the memory-visibility mechanism here —
/// there are no shared mutable fields and no locks.
///
/// The wait between ticks is cancellable: a settings change wakes it,
/// so disabling stops the cycle immediately instead of after the
/// current sleep, and interval changes take effect without waiting out
/// the old duration.

use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::info;

/// Bounds for the auto-generation interval, in seconds.
pub const MIN_INTERVAL_SECS: f64 = 1.0;
pub const MAX_INTERVAL_SECS: f64 = 10.0;
pub const DEFAULT_INTERVAL_SECS: f64 = 2.0;

/// Step used by the UI interval controls.
pub const INTERVAL_STEP_SECS: f64 = 0.5;

/// Events delivered from background tasks to the foreground loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeskEvent {
    /// The auto-generation timer elapsed; the foreground should
    /// generate a headline if auto mode is still enabled.
    AutoTick,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AutoSettings {
    enabled: bool,
    interval_secs: f64,
}

/// Foreground handle controlling the timer task.
///
/// There is exactly one timer task per handle, spawned up front and
/// parked while disabled — enabling twice cannot start a second loop.
pub struct AutoHandle {
    settings_tx: watch::Sender<AutoSettings>,
}

impl AutoHandle {
    pub fn enable(&self) {
        self.update(|s| s.enabled = true);
        info!(interval = self.interval_secs(), "auto-generate enabled");
    }

    pub fn disable(&self) {
        self.update(|s| s.enabled = false);
        info!("auto-generate disabled");
    }

    /// Flip the enabled flag; returns the new state.
    pub fn toggle(&self) -> bool {
        if self.is_enabled() {
            self.disable();
            false
        } else {
            self.enable();
            true
        }
    }

    /// Set the interval, clamped to `[MIN_INTERVAL_SECS, MAX_INTERVAL_SECS]`.
    pub fn set_interval(&self, secs: f64) {
        self.update(|s| s.interval_secs = secs.clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS));
    }

    /// Nudge the interval by `delta` seconds within bounds; returns the
    /// resulting value.
    pub fn adjust_interval(&self, delta: f64) -> f64 {
        self.set_interval(self.interval_secs() + delta);
        self.interval_secs()
    }

    pub fn is_enabled(&self) -> bool {
        self.settings_tx.borrow().enabled
    }

    pub fn interval_secs(&self) -> f64 {
        self.settings_tx.borrow().interval_secs
    }

    // Only notify the task when something actually changed, so enabling
    // while enabled is a true no-op and cannot perturb the tick cadence.
    fn update(&self, f: impl FnOnce(&mut AutoSettings)) {
        self.settings_tx.send_if_modified(|settings| {
            let before = *settings;
            f(settings);
            *settings != before
        });
    }
}

/// Spawns the auto-generation timer task.
pub struct AutoGenerator;

impl AutoGenerator {
    /// Spawn the single timer task for this session. Ticks arrive on
    /// `events_tx`; the task exits when either channel end is dropped.
    pub fn spawn(events_tx: mpsc::UnboundedSender<DeskEvent>) -> AutoHandle {
        let (settings_tx, settings_rx) = watch::channel(AutoSettings {
            enabled: false,
            interval_secs: DEFAULT_INTERVAL_SECS,
        });
        tokio::spawn(run_timer(settings_rx, events_tx));
        AutoHandle { settings_tx }
    }
}

async fn run_timer(
    mut settings_rx: watch::Receiver<AutoSettings>,
    events_tx: mpsc::UnboundedSender<DeskEvent>,
) {
    loop {
        // Park until enabled; exit once the handle is gone.
        loop {
            if settings_rx.borrow_and_update().enabled {
                break;
            }
            if settings_rx.changed().await.is_err() {
                return;
            }
        }

        // Fire, then wait out the interval. Cadence is fire-first: the
        // first headline lands the moment auto mode turns on.
        if events_tx.send(DeskEvent::AutoTick).is_err() {
            return;
        }

        'wait: loop {
            let settings = *settings_rx.borrow_and_update();
            if !settings.enabled {
                break 'wait;
            }
            let sleep = tokio::time::sleep(Duration::from_secs_f64(settings.interval_secs));
            tokio::pin!(sleep);
            tokio::select! {
                _ = &mut sleep => break 'wait,
                changed = settings_rx.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    // Re-read settings and restart the wait.
                }
            }
        }
    }
}
