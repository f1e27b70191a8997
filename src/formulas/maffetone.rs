//! Maffetone aerobic heart rate (the "180 formula").
//!
//! Base = 180 − age + adjustment, where the adjustment depends on the
//! athlete's current training status. The training range spans the ten
//! beats below the base.

use serde::{Deserialize, Serialize};

use super::error::{ensure_positive, FormulaResult};

/// Width of the aerobic training range below the base heart rate.
pub const RANGE_WIDTH_BPM: f64 = 10.0;

/// Training status category that adjusts the base heart rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    /// Recovering from a major illness, injury, or on medication
    Recovering,
    /// Recently injured, inconsistent training, or not improving
    Struggling,
    /// Healthy, training consistently, and making steady progress
    #[default]
    Steady,
    /// Training for 2+ years without injury and improving
    Seasoned,
}

impl TrainingStatus {
    /// All categories in display order.
    pub const ALL: [TrainingStatus; 4] = [
        TrainingStatus::Recovering,
        TrainingStatus::Struggling,
        TrainingStatus::Steady,
        TrainingStatus::Seasoned,
    ];

    /// Adjustment in bpm applied to `180 − age`.
    pub fn adjustment(&self) -> i32 {
        match self {
            TrainingStatus::Recovering => -10,
            TrainingStatus::Struggling => -5,
            TrainingStatus::Steady => 0,
            TrainingStatus::Seasoned => 5,
        }
    }

    /// Human-readable description for the radio list.
    pub fn label(&self) -> &'static str {
        match self {
            TrainingStatus::Recovering => {
                "Recovering from a major illness, injury, or on medication"
            }
            TrainingStatus::Struggling => {
                "Recently injured, inconsistent training, or not improving"
            }
            TrainingStatus::Steady => "Healthy, training consistently, and making steady progress",
            TrainingStatus::Seasoned => "Training for 2+ years without injury and improving",
        }
    }
}

/// Maffetone heart rate range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaffetoneRange {
    /// 180 − age + adjustment
    pub base: f64,
    /// Bottom of the aerobic range (base − 10)
    pub low: f64,
    /// Top of the aerobic range (equal to base)
    pub high: f64,
}

impl std::fmt::Display for MaffetoneRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} bpm", self.low.round(), self.high.round())
    }
}

/// Calculate the Maffetone base heart rate.
pub fn maffetone_base(age: f64, adjustment: i32) -> FormulaResult<f64> {
    let age = ensure_positive("age", age)?;
    Ok(180.0 - age + adjustment as f64)
}

/// Calculate the Maffetone aerobic range for an explicit adjustment.
pub fn maffetone_range(age: f64, adjustment: i32) -> FormulaResult<MaffetoneRange> {
    let base = maffetone_base(age, adjustment)?;

    Ok(MaffetoneRange {
        base,
        low: base - RANGE_WIDTH_BPM,
        high: base,
    })
}

/// Calculate the Maffetone aerobic range for a training status.
pub fn maffetone_range_for(age: f64, status: TrainingStatus) -> FormulaResult<MaffetoneRange> {
    maffetone_range(age, status.adjustment())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_for_steady_athlete() {
        assert_eq!(maffetone_base(40.0, 0), Ok(140.0));
    }

    #[test]
    fn test_range_with_adjustment() {
        let range = maffetone_range_for(30.0, TrainingStatus::Seasoned).unwrap();
        assert_eq!(range.base, 155.0);
        assert_eq!(range.low, 145.0);
        assert_eq!(range.high, 155.0);
        assert_eq!(range.to_string(), "145-155 bpm");
    }

    #[test]
    fn test_rejects_invalid_age() {
        assert!(maffetone_range(0.0, 0).is_err());
        assert!(maffetone_range(-5.0, 0).is_err());
        assert!(maffetone_range(f64::NAN, 0).is_err());
    }
}
