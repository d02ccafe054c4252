//! Elapsed-time display for live session views (e.g. an active call).
//!
//! Each model owns its timing state outright: a unique instance id tags every
//! tick message, so ticks from a reset or superseded stopwatch are simply
//! discarded instead of mutating shared state. Dropping the model releases
//! everything; there is no global timer registry.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message emitted on every stopwatch tick while running.
#[derive(Debug, Clone, Copy)]
pub struct TickMsg {
    /// Id of the stopwatch instance this tick belongs to.
    pub id: i64,
}

/// A running-session stopwatch.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    interval: Duration,
    running: bool,
    started: Option<Instant>,
    accumulated: Duration,
}

/// Creates a stopwatch with a 1-second redraw interval.
pub fn new() -> Model {
    new_with_interval(Duration::from_secs(1))
}

/// Creates a stopwatch with a custom redraw interval.
pub fn new_with_interval(interval: Duration) -> Model {
    Model {
        id: next_id(),
        interval,
        running: false,
        started: None,
        accumulated: Duration::ZERO,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Creates a stopwatch with a 1-second redraw interval.
    pub fn new() -> Self {
        new()
    }

    /// Creates a stopwatch with a custom redraw interval.
    pub fn new_with_interval(interval: Duration) -> Self {
        new_with_interval(interval)
    }

    /// This instance's unique id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether the stopwatch is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts (or resumes) timing and returns the first tick command.
    pub fn start(&mut self) -> Cmd {
        if !self.running {
            self.running = true;
            self.started = Some(Instant::now());
        }
        self.tick_cmd()
    }

    /// Stops timing, folding the running segment into the accumulated total.
    pub fn stop(&mut self) {
        if self.running {
            if let Some(started) = self.started.take() {
                self.accumulated += started.elapsed();
            }
            self.running = false;
        }
    }

    /// Stops and zeroes the stopwatch.
    ///
    /// The instance id is refreshed so ticks already in flight for the old
    /// session are ignored when they arrive.
    pub fn reset(&mut self) {
        self.running = false;
        self.started = None;
        self.accumulated = Duration::ZERO;
        self.id = next_id();
    }

    /// Total elapsed time, including the running segment.
    pub fn elapsed(&self) -> Duration {
        let live = self.started.map(|s| s.elapsed()).unwrap_or(Duration::ZERO);
        self.accumulated + live
    }

    /// Handles tick messages, scheduling the next tick while running.
    ///
    /// Ticks tagged with a different id (from before a reset) are discarded.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<TickMsg>() {
            if tick_msg.id == self.id && self.running {
                return Some(self.tick_cmd());
            }
        }
        None
    }

    /// Renders the elapsed time as `mm:ss` or `hh:mm:ss`.
    pub fn view(&self) -> String {
        let total = self.elapsed().as_secs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        if hours > 0 {
            format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{:02}:{:02}", minutes, seconds)
        }
    }

    fn tick_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id }) as Msg)
    }
}
