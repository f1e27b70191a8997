//! Clock sources and the 1 Hz tick driver for the interval timer.
//!
//! The timer never sleeps or spawns anything. The UI polls
//! [`IntervalTimer::update`] every frame; the driver compares the injected
//! clock with its last tick boundary and reports how many whole seconds have
//! passed. Tests swap in a [`ManualClock`] and advance it by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::workouts::engine::IntervalSequencer;
use crate::workouts::types::{SequencerEvent, TimerStatus};

/// Length of one sequencer tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock independent time backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Move time forward by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Converts clock readings into whole-second ticks.
#[derive(Debug, Clone, Default)]
pub struct TickDriver {
    /// Time of the last emitted tick boundary while armed.
    anchor: Option<Duration>,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start producing ticks, the first one a full period after `now`.
    pub fn arm(&mut self, now: Duration) {
        self.anchor = Some(now);
    }

    /// Stop producing ticks. Any partial period is discarded.
    pub fn disarm(&mut self) {
        self.anchor = None;
    }

    pub fn is_armed(&self) -> bool {
        self.anchor.is_some()
    }

    /// Number of whole periods elapsed since the last call, consuming them.
    pub fn due_ticks(&mut self, now: Duration) -> u32 {
        let Some(anchor) = self.anchor else {
            return 0;
        };

        let elapsed = now.saturating_sub(anchor);
        let ticks = (elapsed.as_nanos() / TICK_PERIOD.as_nanos()) as u32;
        self.anchor = Some(anchor + TICK_PERIOD * ticks);
        ticks
    }

    /// Time left until the next tick, when armed.
    pub fn until_next_tick(&self, now: Duration) -> Option<Duration> {
        let anchor = self.anchor?;
        let elapsed = now.saturating_sub(anchor);
        Some(TICK_PERIOD.saturating_sub(elapsed))
    }
}

/// An interval sequencer driven by a clock.
///
/// The tick driver is armed only while the sequencer runs, so a paused,
/// reset, finished or dropped timer has no live tick source.
#[derive(Debug)]
pub struct IntervalTimer<C: Clock> {
    sequencer: IntervalSequencer,
    driver: TickDriver,
    clock: C,
}

impl<C: Clock> IntervalTimer<C> {
    pub fn new(sequencer: IntervalSequencer, clock: C) -> Self {
        Self {
            sequencer,
            driver: TickDriver::new(),
            clock,
        }
    }

    pub fn start(&mut self) {
        self.sequencer.start();
        if self.sequencer.is_running() && !self.driver.is_armed() {
            self.driver.arm(self.clock.now());
        }
    }

    pub fn pause(&mut self) {
        self.sequencer.pause();
        self.driver.disarm();
    }

    pub fn reset(&mut self) {
        self.sequencer.reset();
        self.driver.disarm();
    }

    pub fn skip_interval(&mut self) -> Vec<SequencerEvent> {
        let events = self.sequencer.skip_interval();
        if self.sequencer.is_running() {
            // Full second for the new interval
            self.driver.arm(self.clock.now());
        } else {
            self.driver.disarm();
        }
        events
    }

    /// Apply all ticks that came due since the last update.
    pub fn update(&mut self) -> Vec<SequencerEvent> {
        let due = self.driver.due_ticks(self.clock.now());
        let mut events = Vec::new();

        for _ in 0..due {
            events.extend(self.sequencer.tick());
            if self.sequencer.status() != TimerStatus::Running {
                self.driver.disarm();
                break;
            }
        }

        events
    }

    /// Time until the next tick while running.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.driver.until_next_tick(self.clock.now())
    }

    pub fn is_ticking(&self) -> bool {
        self.driver.is_armed()
    }

    pub fn sequencer(&self) -> &IntervalSequencer {
        &self.sequencer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
