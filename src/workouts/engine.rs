//! Countdown interval sequencer.
//!
//! Walks an interval list one second at a time, repeating it for a number of
//! rounds. Time only moves when [`IntervalSequencer::tick`] is called; the
//! caller decides where ticks come from (see [`crate::workouts::clock`]).

use crate::workouts::types::{
    SequencerEvent, SequencerState, TimedInterval, TimerStatus, WorkoutError, WorkoutPlan,
};

/// Remaining seconds at which countdown cues fire.
const COUNTDOWN_FROM: u32 = 3;

/// Interval sequencer state machine.
///
/// Idle and Paused both move to Running on start. Running moves to Paused on
/// pause and to Complete once the last interval of the last round expires.
/// Reset returns to Idle from any state.
#[derive(Debug, Clone)]
pub struct IntervalSequencer {
    intervals: Vec<TimedInterval>,
    total_rounds: u32,
    state: SequencerState,
}

impl IntervalSequencer {
    /// Create a sequencer over `intervals`, repeated `total_rounds` times.
    pub fn new(intervals: Vec<TimedInterval>, total_rounds: u32) -> Result<Self, WorkoutError> {
        let Some(first) = intervals.first() else {
            return Err(WorkoutError::InvalidWorkout(
                "Workout has no intervals".to_string(),
            ));
        };

        if total_rounds == 0 {
            return Err(WorkoutError::InvalidWorkout(
                "Workout needs at least one round".to_string(),
            ));
        }

        if let Some(empty) = intervals.iter().find(|i| i.duration_seconds == 0) {
            return Err(WorkoutError::InvalidWorkout(format!(
                "Interval '{}' has zero duration",
                empty.name
            )));
        }

        let state = initial_state(first);
        Ok(Self {
            intervals,
            total_rounds,
            state,
        })
    }

    /// Create a single-round sequencer from a generated plan.
    pub fn from_plan(plan: &WorkoutPlan) -> Result<Self, WorkoutError> {
        let intervals = plan.intervals().iter().map(TimedInterval::from).collect();
        Self::new(intervals, 1)
    }

    /// Start or resume counting down.
    pub fn start(&mut self) {
        match self.state.status {
            TimerStatus::Idle | TimerStatus::Paused => {
                let resumed = self.state.status == TimerStatus::Paused;
                self.state.status = TimerStatus::Running;
                if resumed {
                    tracing::info!("Interval timer resumed");
                } else {
                    tracing::info!("Interval timer started");
                }
            }
            TimerStatus::Running | TimerStatus::Complete => {}
        }
    }

    /// Pause a running countdown.
    pub fn pause(&mut self) {
        if self.state.status == TimerStatus::Running {
            self.state.status = TimerStatus::Paused;
            tracing::info!("Interval timer paused");
        }
    }

    /// Return to the first interval of round one.
    pub fn reset(&mut self) {
        self.state = initial_state(&self.intervals[0]);
        tracing::info!("Interval timer reset");
    }

    /// Advance one second. Does nothing unless running.
    pub fn tick(&mut self) -> Vec<SequencerEvent> {
        if self.state.status != TimerStatus::Running {
            return Vec::new();
        }

        let mut events = if self.state.remaining_seconds <= 1 {
            self.advance()
        } else {
            self.state.remaining_seconds -= 1;
            Vec::new()
        };

        let remaining = self.state.remaining_seconds;
        if self.state.status == TimerStatus::Running && (1..=COUNTDOWN_FROM).contains(&remaining)
        {
            events.push(SequencerEvent::Countdown { seconds: remaining });
        }

        events
    }

    /// Jump to the next interval as if the current one had expired.
    pub fn skip_interval(&mut self) -> Vec<SequencerEvent> {
        if self.state.status == TimerStatus::Complete {
            return Vec::new();
        }
        tracing::debug!("Skipping interval {}", self.state.plan_index);
        self.advance()
    }

    fn advance(&mut self) -> Vec<SequencerEvent> {
        let next_index = self.state.plan_index + 1;

        if next_index < self.intervals.len() {
            self.state.plan_index = next_index;
            self.state.remaining_seconds = self.intervals[next_index].duration_seconds;
            tracing::debug!(
                "Interval {} ({}) started in round {}",
                next_index,
                self.intervals[next_index].name,
                self.state.round
            );
            return vec![SequencerEvent::IntervalStarted {
                index: next_index,
                round: self.state.round,
            }];
        }

        if self.state.round < self.total_rounds {
            self.state.round += 1;
            self.state.plan_index = 0;
            self.state.remaining_seconds = self.intervals[0].duration_seconds;
            tracing::debug!("Round {} of {} started", self.state.round, self.total_rounds);
            return vec![
                SequencerEvent::RoundStarted {
                    round: self.state.round,
                },
                SequencerEvent::IntervalStarted {
                    index: 0,
                    round: self.state.round,
                },
            ];
        }

        self.state.status = TimerStatus::Complete;
        self.state.remaining_seconds = 0;
        tracing::info!("Interval timer completed");
        vec![SequencerEvent::Completed]
    }

    /// Current state snapshot.
    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        self.state.status
    }

    pub fn is_running(&self) -> bool {
        self.state.running()
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn intervals(&self) -> &[TimedInterval] {
        &self.intervals
    }

    /// The interval being counted down.
    pub fn current_interval(&self) -> &TimedInterval {
        &self.intervals[self.state.plan_index]
    }

    /// The following interval within this round, if any.
    pub fn next_interval(&self) -> Option<&TimedInterval> {
        self.intervals.get(self.state.plan_index + 1)
    }

    /// Length of the whole session across all rounds, in seconds.
    pub fn total_duration_seconds(&self) -> u32 {
        self.intervals
            .iter()
            .map(|i| i.duration_seconds)
            .fold(0u32, u32::saturating_add)
            .saturating_mul(self.total_rounds)
    }

    /// True before any time has elapsed (Start rather than Resume).
    pub fn is_at_start(&self) -> bool {
        self.state.round == 1
            && self.state.plan_index == 0
            && self.state.remaining_seconds == self.intervals[0].duration_seconds
    }

    /// Session progress from 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        if self.state.status == TimerStatus::Complete {
            return 1.0;
        }

        let per_round = self.intervals.len();
        let total = (per_round as u64 * u64::from(self.total_rounds)) as f64;
        let finished_rounds = u64::from(self.state.round - 1);
        let completed = (finished_rounds * per_round as u64 + self.state.plan_index as u64) as f64;

        let current = self.current_interval();
        let duration = f64::from(current.duration_seconds);
        let fraction = (duration - f64::from(self.state.remaining_seconds)) / duration;

        ((completed + fraction) / total).clamp(0.0, 1.0)
    }
}

fn initial_state(first: &TimedInterval) -> SequencerState {
    SequencerState {
        plan_index: 0,
        remaining_seconds: first.duration_seconds,
        round: 1,
        status: TimerStatus::Idle,
    }
}
