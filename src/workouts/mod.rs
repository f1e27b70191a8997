//! Interval workouts: HIIT plan generation and the countdown timer.

pub mod clock;
pub mod engine;
pub mod library;
pub mod plan;
pub mod types;

pub use clock::{Clock, IntervalTimer, ManualClock, MonotonicClock, TickDriver};
pub use engine::IntervalSequencer;
pub use library::{strength_routine, Routine};
pub use plan::{
    build_plan, format_duration, stats, HiitGoal, PlanExport, WorkRestRatio, WorkoutPreset,
};
pub use types::{
    IntervalKind, IntervalSpec, SequencerEvent, SequencerState, TimedInterval, TimerStatus,
    WorkoutError, WorkoutPlan, WorkoutStats,
};
