//! RustRun - Running and Fitness Calculators
//!
//! A desktop toolbox for runners: Maffetone and Karvonen heart rate targets,
//! Riegel, VDOT and Magic Mile race predictions, a pace converter, a HIIT plan
//! generator and an interval timer with audio cues.

pub mod audio;
pub mod formulas;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use formulas::{FormulaError, VdotReport};
pub use storage::config::AppConfig;
pub use workouts::engine::IntervalSequencer;
pub use workouts::types::{WorkoutError, WorkoutPlan};
