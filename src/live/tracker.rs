//! Periodic "current time" publisher.
//!
//! # States
//!
//! | State | Entered by | Behaviour |
//! |-------|-----------|-----------|
//! | Idle | `new`, `stop` | No task; last reading stays readable |
//! | Ticking | `start` | Task reads the clock every interval and publishes it |
//!
//! Each tick publishes exactly one [`CurrentTime`] through a `watch`
//! channel, so readers always observe a whole value. Ticks missed while the
//! runtime was busy are skipped, never replayed.

use std::sync::Arc;
use std::time::Duration;

use log::{info, trace};
use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::clock::{Clock, CurrentTime, SystemClock};

/// Default tick period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Errors from tracker lifecycle calls.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// `start` was called outside a tokio runtime.
    #[error("live-time tracker requires a running tokio runtime")]
    NoRuntime,
    /// The tick task panicked.
    #[error("live-time tracker task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

enum TrackerState {
    Idle,
    Ticking {
        shutdown: oneshot::Sender<()>,
        handle: JoinHandle<()>,
    },
}

/// Cancellable live-time tracker.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use u_timetable::live::{CurrentTime, FixedClock, LiveTimeTracker};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let clock = Arc::new(FixedClock(CurrentTime::new(0, 9.5)));
/// let mut tracker = LiveTimeTracker::new(clock);
/// tracker.start().unwrap();
/// assert!(tracker.is_ticking());
/// assert_eq!(tracker.current(), CurrentTime::new(0, 9.5));
/// tracker.stop().await.unwrap();
/// assert!(!tracker.is_ticking());
/// # }
/// ```
pub struct LiveTimeTracker {
    clock: Arc<dyn Clock>,
    interval: Duration,
    sender: Arc<watch::Sender<CurrentTime>>,
    state: TrackerState,
}

impl LiveTimeTracker {
    /// Creates an idle tracker, seeded with one clock reading.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let (sender, _) = watch::channel(clock.now());
        Self {
            clock,
            interval: DEFAULT_TICK_INTERVAL,
            sender: Arc::new(sender),
            state: TrackerState::Idle,
        }
    }

    /// Creates an idle tracker on the system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Sets the tick period. Takes effect on the next `start`.
    ///
    /// A zero duration is raised to one millisecond.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Tick period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the tick task is running.
    pub fn is_ticking(&self) -> bool {
        matches!(self.state, TrackerState::Ticking { .. })
    }

    /// Latest published reading.
    pub fn current(&self) -> CurrentTime {
        *self.sender.borrow()
    }

    /// Receiver notified on every tick.
    pub fn subscribe(&self) -> watch::Receiver<CurrentTime> {
        self.sender.subscribe()
    }

    /// Idle → ticking. No-op when already ticking.
    ///
    /// Publishes a fresh reading immediately, then once per interval.
    pub fn start(&mut self) -> Result<(), TrackerError> {
        if self.is_ticking() {
            return Ok(());
        }
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| TrackerError::NoRuntime)?;

        // Readers see a current value as soon as `start` returns.
        self.sender.send_replace(self.clock.now());

        let (shutdown, shutdown_rx) = oneshot::channel();
        let handle = runtime.spawn(tick_loop(
            Arc::clone(&self.clock),
            Arc::clone(&self.sender),
            self.interval,
            shutdown_rx,
        ));
        info!("live-time tracker started ({:?} interval)", self.interval);
        self.state = TrackerState::Ticking { shutdown, handle };
        Ok(())
    }

    /// Ticking → idle. Returns once the task has finished, so nothing is
    /// published after this resolves. No-op when idle.
    pub async fn stop(&mut self) -> Result<(), TrackerError> {
        match std::mem::replace(&mut self.state, TrackerState::Idle) {
            TrackerState::Idle => Ok(()),
            TrackerState::Ticking { shutdown, handle } => {
                // The task may already have exited; a closed channel is fine.
                let _ = shutdown.send(());
                handle.await?;
                info!("live-time tracker stopped");
                Ok(())
            }
        }
    }
}

impl Drop for LiveTimeTracker {
    fn drop(&mut self) {
        if let TrackerState::Ticking { handle, .. } = &self.state {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for LiveTimeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveTimeTracker")
            .field("clock", &self.clock)
            .field("interval", &self.interval)
            .field("ticking", &self.is_ticking())
            .field("current", &self.current())
            .finish()
    }
}

async fn tick_loop(
    clock: Arc<dyn Clock>,
    sender: Arc<watch::Sender<CurrentTime>>,
    period: Duration,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately; `start` already published.
    ticker.tick().await;

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                let now = clock.now();
                trace!("tick: day {} hour {:.3}", now.day_index, now.hour);
                sender.send_replace(now);
            }
        }
    }
}
