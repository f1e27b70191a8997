//! Built-in timed routines.

use serde::{Deserialize, Serialize};

use super::engine::IntervalSequencer;
use super::types::{IntervalKind, TimedInterval, WorkoutError};

/// Work period of the strength routine, in seconds.
pub const STRENGTH_WORK_SECONDS: u32 = 40;
/// Rest period of the strength routine, in seconds.
pub const STRENGTH_REST_SECONDS: u32 = 20;
/// Default number of rounds.
pub const STRENGTH_ROUNDS: u32 = 2;

const STRENGTH_EXERCISES: [&str; 5] = [
    "Goblet Squats",
    "Push-ups",
    "Kettlebell Deadlifts",
    "Dead Hang",
    "Plank",
];

/// A fixed circuit of exercises repeated for several rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    /// Display title
    pub title: String,
    /// Intervals of one round
    pub intervals: Vec<TimedInterval>,
    /// Number of rounds
    pub rounds: u32,
    /// Suggested sessions per week
    pub frequency: String,
    /// Coaching tips
    pub tips: Vec<String>,
}

impl Routine {
    /// Create a single-round routine with no intervals.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            intervals: Vec::new(),
            rounds: 1,
            frequency: String::new(),
            tips: Vec::new(),
        }
    }

    /// Append an exercise followed by a rest period.
    pub fn with_exercise(mut self, name: &str, work_seconds: u32, rest_seconds: u32) -> Self {
        self.intervals
            .push(TimedInterval::new(name, IntervalKind::Work, work_seconds));
        self.intervals
            .push(TimedInterval::new("Rest", IntervalKind::Rest, rest_seconds));
        self
    }

    /// Set the number of rounds.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set frequency text.
    pub fn with_frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = frequency.into();
        self
    }

    /// Set tips.
    pub fn with_tips(mut self, tips: &[&str]) -> Self {
        self.tips = tips.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Exercises of one round, rest periods excluded.
    pub fn exercises(&self) -> impl Iterator<Item = &TimedInterval> {
        self.intervals.iter().filter(|i| !i.is_rest())
    }

    /// Session length across all rounds, in minutes.
    pub fn total_minutes(&self) -> f64 {
        let per_round: u32 = self.intervals.iter().map(|i| i.duration_seconds).sum();
        f64::from(per_round) * f64::from(self.rounds) / 60.0
    }

    /// Build a sequencer that runs this routine.
    pub fn sequencer(&self) -> Result<IntervalSequencer, WorkoutError> {
        IntervalSequencer::new(self.intervals.clone(), self.rounds)
    }
}

/// The 10-minute strength circuit: five exercises, 40 s on and 20 s off,
/// two rounds.
pub fn strength_routine() -> Routine {
    STRENGTH_EXERCISES
        .iter()
        .fold(Routine::new("10-Minute Strength Routine"), |routine, name| {
            routine.with_exercise(name, STRENGTH_WORK_SECONDS, STRENGTH_REST_SECONDS)
        })
        .with_rounds(STRENGTH_ROUNDS)
        .with_frequency("2x per week")
        .with_tips(&[
            "Audio cues: 3 beeps for countdown, long beep for transitions",
            "Focus on proper form over speed",
            "Use challenging but manageable weights",
            "Keep rest periods active (light movement)",
            "Stay hydrated throughout the workout",
        ])
}
