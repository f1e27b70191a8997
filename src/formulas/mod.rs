//! Calculator formulas for heart rate, race prediction and pace.

pub mod distance;
pub mod error;
pub mod format;
pub mod karvonen;
pub mod maffetone;
pub mod magic_mile;
pub mod pace;
pub mod riegel;
pub mod vdot;

pub use distance::{RaceDistance, KM_PER_MILE};
pub use error::{FormulaError, FormulaResult};
pub use format::{
    format_pace, format_race_time, hms_to_seconds, ms_to_seconds, PACE_PLACEHOLDER,
    TIME_PLACEHOLDER,
};
pub use karvonen::{resolve_max_hr, HrZoneRange, KarvonenZones, MaxHrSource};
pub use maffetone::{maffetone_range, maffetone_range_for, MaffetoneRange, TrainingStatus};
pub use magic_mile::{magic_mile_predictions, MagicMilePrediction};
pub use pace::{convert_pace_to_km, convert_pace_to_miles, Pace, PaceDirection};
pub use riegel::{pace_per_unit, riegel_time};
pub use vdot::{
    calculate_vdot, predict_race_time, race_predictions, training_paces, RacePrediction,
    TrainingPace, VdotReport,
};
