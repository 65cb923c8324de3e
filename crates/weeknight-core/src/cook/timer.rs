//! Countdown timer for the active step.
//!
//! [`Timer`] holds the countdown state and applies ticks; the periodic
//! schedule comes from a [`Ticker`]. Only an armed ticker yields ticks, and
//! the timer arms it only while running, so a paused or finished timer never
//! receives a tick. Dropping the timer drops its ticker, which releases the
//! underlying interval.
//!
//! ```rust
//! use weeknight_core::cook::{ManualTicker, Tick, Timer};
//!
//! # async fn example() {
//! let mut timer = Timer::new(3, ManualTicker::default());
//! timer.start();
//! assert_eq!(timer.next_tick().await, Tick::Counted { remaining: 2 });
//! assert_eq!(timer.next_tick().await, Tick::Counted { remaining: 1 });
//! assert_eq!(timer.next_tick().await, Tick::Finished);
//! assert!(!timer.is_running());
//! # }
//! ```

use std::{future, io::Write, time::Duration};

use async_trait::async_trait;
use log::debug;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// Wall-clock spacing between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source driving a [`Timer`].
#[async_trait]
pub trait Ticker: Send {
    /// Starts delivering ticks, one period from now.
    fn arm(&mut self);

    /// Stops delivering ticks.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;

    /// Resolves on the next tick. Never resolves while disarmed.
    async fn wait(&mut self);
}

/// Real-time ticker backed by [`tokio::time::Interval`].
#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }
}

impl Default for IntervalTicker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

#[async_trait]
impl Ticker for IntervalTicker {
    fn arm(&mut self) {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    async fn wait(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => future::pending::<()>().await,
        }
    }
}

/// Virtual-time ticker: every `wait` while armed is one elapsed period.
#[derive(Debug, Default)]
pub struct ManualTicker {
    armed: bool,
    /// Number of times the ticker has been armed
    pub arm_count: u32,
    /// Number of ticks delivered
    pub delivered: u64,
}

#[async_trait]
impl Ticker for ManualTicker {
    fn arm(&mut self) {
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }

    async fn wait(&mut self) {
        if !self.armed {
            future::pending::<()>().await;
        }
        self.delivered += 1;
        tokio::task::yield_now().await;
    }
}

/// Result of applying one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer was not running; nothing changed
    Idle,

    /// One second elapsed
    Counted { remaining: u32 },

    /// The countdown reached zero on this tick
    Finished,
}

type CompletionCallback = Box<dyn FnMut() + Send>;

/// Countdown clock for the active step.
pub struct Timer<T: Ticker = IntervalTicker> {
    seed: u32,
    remaining: u32,
    running: bool,
    ticker: T,
    on_complete: Option<CompletionCallback>,
}

impl<T: Ticker> Timer<T> {
    /// A stopped timer holding `seed` seconds.
    pub fn new(seed: u32, ticker: T) -> Self {
        Self {
            seed,
            remaining: seed,
            running: false,
            ticker,
            on_complete: None,
        }
    }

    /// Sets the callback run each time a countdown reaches zero.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    /// Starts counting down. No-op when already running or at zero.
    pub fn start(&mut self) {
        if self.running || self.remaining == 0 {
            return;
        }
        self.running = true;
        // Never leave a previous schedule alive next to the new one.
        self.ticker.disarm();
        self.ticker.arm();
        debug!("Timer started at {}s", self.remaining);
    }

    /// Stops counting down. Idempotent.
    pub fn pause(&mut self) {
        self.running = false;
        self.ticker.disarm();
    }

    /// Stops the timer and sets the remaining time to `seconds`, or back to
    /// the seed when `None`.
    pub fn reset(&mut self, seconds: Option<u32>) {
        self.pause();
        self.remaining = seconds.unwrap_or(self.seed);
    }

    /// Replaces the seed and resets to it. Used when the active step changes.
    pub fn reseed(&mut self, seed: u32) {
        self.seed = seed;
        self.reset(None);
    }

    /// Adds `delta` seconds (negative to subtract), never going below zero.
    /// Leaves the running state alone.
    pub fn add_time(&mut self, delta: i64) {
        let updated = (i64::from(self.remaining) + delta).clamp(0, i64::from(u32::MAX));
        self.remaining = updated as u32;
    }

    /// Applies one elapsed period.
    ///
    /// A running timer at one second (or already at zero after `add_time`)
    /// finishes: it stops, and the completion callback runs once.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        if self.remaining > 1 {
            self.remaining -= 1;
            return Tick::Counted {
                remaining: self.remaining,
            };
        }

        self.remaining = 0;
        self.pause();
        debug!("Timer finished");
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
        Tick::Finished
    }

    /// Waits for the next scheduled tick and applies it.
    ///
    /// Pends forever while the timer is not running, which makes it safe to
    /// use as a `tokio::select!` branch.
    pub async fn next_tick(&mut self) -> Tick {
        self.ticker.wait().await;
        self.tick()
    }
}

/// Audible signal played when a countdown finishes.
pub trait Cue: Send + Sync {
    fn play(&self) -> std::io::Result<()>;
}

/// Rings the terminal bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Cue for TerminalBell {
    fn play(&self) -> std::io::Result<()> {
        let mut stdout = std::io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

/// Plays the cue, ignoring failures.
pub fn play_cue(cue: &dyn Cue) {
    if let Err(e) = cue.play() {
        debug!("Completion cue failed: {e}");
    }
}
