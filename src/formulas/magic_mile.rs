//! Jeff Galloway's Magic Mile race pace predictions.
//!
//! A one-mile time trial scaled to per-mile race paces:
//! - 5K: mile + 33 s
//! - 10K: mile × 1.15
//! - 10 mile: mile × 1.175
//! - Half marathon: mile × 1.2
//! - Marathon: mile × 1.3

use serde::{Deserialize, Serialize};

use super::error::{ensure_positive, FormulaResult};

/// Divisor used to express the per-mile pace per kilometre.
pub const MILE_TO_KM_PACE_DIVISOR: f64 = 1.60934;

/// How a distance derives its pace from the mile time.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PaceRule {
    Add(f64),
    Multiply(f64),
}

impl PaceRule {
    fn apply(self, mile_seconds: f64) -> f64 {
        match self {
            PaceRule::Add(seconds) => mile_seconds + seconds,
            PaceRule::Multiply(factor) => mile_seconds * factor,
        }
    }
}

/// Predicted distances as (label, miles, pace rule).
const DISTANCES: [(&str, f64, PaceRule); 5] = [
    ("5K", 3.10686, PaceRule::Add(33.0)),
    ("10K", 6.21371, PaceRule::Multiply(1.15)),
    ("10 Mile", 10.0, PaceRule::Multiply(1.175)),
    ("Half Marathon", 13.1094, PaceRule::Multiply(1.2)),
    ("Marathon", 26.2188, PaceRule::Multiply(1.3)),
];

/// Predicted race pace and time for one distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagicMilePrediction {
    /// Distance label ("5K", "10 Mile", ...)
    pub label: String,
    /// Race distance in miles
    pub distance_miles: f64,
    /// Pace in seconds per mile
    pub pace_per_mile: f64,
    /// Pace in seconds per kilometre
    pub pace_per_km: f64,
    /// Race time in seconds
    pub total_time: f64,
}

/// Predict race paces and times from a Magic Mile time in seconds.
pub fn magic_mile_predictions(mile_seconds: f64) -> FormulaResult<Vec<MagicMilePrediction>> {
    let mile_seconds = ensure_positive("Magic Mile time", mile_seconds)?;

    Ok(DISTANCES
        .iter()
        .map(|&(label, miles, rule)| {
            let pace_per_mile = rule.apply(mile_seconds);
            MagicMilePrediction {
                label: label.to_string(),
                distance_miles: miles,
                pace_per_mile,
                pace_per_km: pace_per_mile / MILE_TO_KM_PACE_DIVISOR,
                total_time: pace_per_mile * miles,
            }
        })
        .collect())
}
