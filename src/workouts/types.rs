//! Workout types and enums.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of interval within a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    /// Easy effort before the main set
    Warmup,
    /// Hard effort
    Work,
    /// Recovery between efforts
    Rest,
    /// Easy effort after the main set
    Cooldown,
}

impl IntervalKind {
    /// Whether this interval is a recovery interval.
    pub fn is_rest(&self) -> bool {
        matches!(self, IntervalKind::Rest)
    }
}

impl std::fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntervalKind::Warmup => write!(f, "Warmup"),
            IntervalKind::Work => write!(f, "Work"),
            IntervalKind::Rest => write!(f, "Rest"),
            IntervalKind::Cooldown => write!(f, "Cooldown"),
        }
    }
}

/// A single interval of a generated workout plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalSpec {
    kind: IntervalKind,
    duration_seconds: u32,
    intensity: Option<String>,
}

impl IntervalSpec {
    /// Create an interval. Zero-length intervals are rejected.
    pub fn new(
        kind: IntervalKind,
        duration_seconds: u32,
        intensity: Option<String>,
    ) -> Result<Self, WorkoutError> {
        if duration_seconds == 0 {
            return Err(WorkoutError::InvalidWorkout(format!(
                "{} interval has zero duration",
                kind
            )));
        }

        Ok(Self {
            kind,
            duration_seconds,
            intensity,
        })
    }

    pub fn kind(&self) -> IntervalKind {
        self.kind
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Intensity cue shown next to the interval.
    pub fn intensity(&self) -> Option<&str> {
        self.intensity.as_deref()
    }
}

/// A generated interval workout.
///
/// Construction enforces the plan shape: non-empty, an optional single warmup
/// in first position, an optional single cooldown in last position and no
/// two rest intervals in a row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPlan {
    name: String,
    description: String,
    recommendations: Vec<String>,
    intervals: Vec<IntervalSpec>,
    total_duration_minutes: f64,
}

impl WorkoutPlan {
    /// Create a plan, validating the interval sequence.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        recommendations: Vec<String>,
        intervals: Vec<IntervalSpec>,
    ) -> Result<Self, WorkoutError> {
        validate_sequence(&intervals)?;

        let total_seconds: u64 = intervals
            .iter()
            .map(|i| u64::from(i.duration_seconds))
            .sum();

        Ok(Self {
            name: name.into(),
            description: description.into(),
            recommendations,
            intervals,
            total_duration_minutes: total_seconds as f64 / 60.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn intervals(&self) -> &[IntervalSpec] {
        &self.intervals
    }

    /// Sum of all interval durations in minutes.
    pub fn total_duration_minutes(&self) -> f64 {
        self.total_duration_minutes
    }

    /// Intervals of one kind.
    pub fn intervals_of(&self, kind: IntervalKind) -> impl Iterator<Item = &IntervalSpec> {
        self.intervals.iter().filter(move |i| i.kind == kind)
    }
}

fn validate_sequence(intervals: &[IntervalSpec]) -> Result<(), WorkoutError> {
    if intervals.is_empty() {
        return Err(WorkoutError::InvalidWorkout(
            "Workout has no intervals".to_string(),
        ));
    }

    let last = intervals.len() - 1;
    for (i, interval) in intervals.iter().enumerate() {
        match interval.kind {
            IntervalKind::Warmup if i != 0 => {
                return Err(WorkoutError::InvalidWorkout(format!(
                    "warmup at position {} must be the first interval",
                    i
                )));
            }
            IntervalKind::Cooldown if i != last => {
                return Err(WorkoutError::InvalidWorkout(format!(
                    "cooldown at position {} must be the last interval",
                    i
                )));
            }
            IntervalKind::Rest if i > 0 && intervals[i - 1].kind.is_rest() => {
                return Err(WorkoutError::InvalidWorkout(format!(
                    "consecutive rest intervals at position {}",
                    i
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Aggregate figures for a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutStats {
    /// Total work time in seconds
    pub total_work_seconds: u32,
    /// Total rest time in seconds
    pub total_rest_seconds: u32,
    /// Number of work intervals
    pub work_intervals: usize,
    /// Reduced work:rest ratio, e.g. "1:2"
    pub ratio: String,
}

/// An interval as the countdown sequencer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedInterval {
    /// Display name ("Goblet Squats", "Work", ...)
    pub name: String,
    /// Interval kind
    pub kind: IntervalKind,
    /// Duration in seconds
    pub duration_seconds: u32,
}

impl TimedInterval {
    pub fn new(name: impl Into<String>, kind: IntervalKind, duration_seconds: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            duration_seconds,
        }
    }

    /// Whether this is a recovery interval.
    pub fn is_rest(&self) -> bool {
        self.kind.is_rest()
    }
}

impl From<&IntervalSpec> for TimedInterval {
    fn from(spec: &IntervalSpec) -> Self {
        Self::new(spec.kind.to_string(), spec.kind, spec.duration_seconds)
    }
}

/// Run status of the countdown sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    /// Not started, or reset
    #[default]
    Idle,
    /// Counting down
    Running,
    /// Stopped mid-way, can resume
    Paused,
    /// All rounds finished
    Complete,
}

/// Snapshot of the countdown sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerState {
    /// Index of the current interval within the round
    pub plan_index: usize,
    /// Seconds left in the current interval
    pub remaining_seconds: u32,
    /// Current round (1-based)
    pub round: u32,
    /// Run status
    pub status: TimerStatus,
}

impl SequencerState {
    pub fn running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn complete(&self) -> bool {
        self.status == TimerStatus::Complete
    }
}

/// Something that happened during a tick, used to drive cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The display now shows this many seconds (3, 2 or 1)
    Countdown { seconds: u32 },
    /// A new interval began
    IntervalStarted { index: usize, round: u32 },
    /// A new round began
    RoundStarted { round: u32 },
    /// All rounds finished
    Completed,
}

/// Errors related to workout operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Requested duration is outside (0, 60] minutes
    #[error("Invalid duration: {0} minutes (must be between 0 and 60)")]
    InvalidDuration(f64),

    /// Not enough time for warmup, cooldown and one work interval
    #[error("Insufficient time: {0}")]
    InsufficientTime(String),

    /// Invalid workout structure
    #[error("Invalid workout: {0}")]
    InvalidWorkout(String),

    /// Work:rest ratio could not be parsed
    #[error("Invalid work:rest ratio: {0}")]
    InvalidRatio(String),
}
