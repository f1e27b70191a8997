//! Pace conversion between minutes per mile and minutes per kilometre.

use serde::{Deserialize, Serialize};

use super::distance::KM_PER_MILE;

/// A pace as whole minutes and seconds per unit distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pace {
    pub minutes: u32,
    pub seconds: u32,
}

impl Pace {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self { minutes, seconds }
    }

    /// Split fractional minutes into whole minutes and rounded seconds.
    /// Non-positive or non-finite input yields 0:00.
    pub fn from_total_minutes(total_minutes: f64) -> Self {
        if !total_minutes.is_finite() || total_minutes <= 0.0 {
            return Self::default();
        }

        let mut minutes = total_minutes.floor();
        let mut seconds = ((total_minutes - minutes) * 60.0).round();

        // Rounding can land on 60
        if seconds >= 60.0 {
            minutes += 1.0;
            seconds = 0.0;
        }

        Self {
            minutes: minutes as u32,
            seconds: seconds as u32,
        }
    }

    /// Pace as fractional minutes.
    pub fn total_minutes(&self) -> f64 {
        self.minutes as f64 + self.seconds as f64 / 60.0
    }
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Direction of a pace conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaceDirection {
    /// min/mile to min/km
    #[default]
    MileToKm,
    /// min/km to min/mile
    KmToMile,
}

impl PaceDirection {
    /// Unit label of the input pace.
    pub fn input_unit(&self) -> &'static str {
        match self {
            PaceDirection::MileToKm => "min/mile",
            PaceDirection::KmToMile => "min/km",
        }
    }

    /// Unit label of the converted pace.
    pub fn output_unit(&self) -> &'static str {
        match self {
            PaceDirection::MileToKm => "min/km",
            PaceDirection::KmToMile => "min/mile",
        }
    }

    /// Convert a pace in this direction.
    pub fn convert(&self, minutes: f64, seconds: f64) -> Pace {
        match self {
            PaceDirection::MileToKm => convert_pace_to_km(minutes, seconds),
            PaceDirection::KmToMile => convert_pace_to_miles(minutes, seconds),
        }
    }
}

fn combined_minutes(minutes: f64, seconds: f64) -> f64 {
    let minutes = if minutes.is_finite() { minutes } else { 0.0 };
    let seconds = if seconds.is_finite() { seconds } else { 0.0 };
    minutes + seconds / 60.0
}

/// Convert a min/mile pace to min/km.
pub fn convert_pace_to_km(minutes: f64, seconds: f64) -> Pace {
    Pace::from_total_minutes(combined_minutes(minutes, seconds) / KM_PER_MILE)
}

/// Convert a min/km pace to min/mile.
pub fn convert_pace_to_miles(minutes: f64, seconds: f64) -> Pace {
    Pace::from_total_minutes(combined_minutes(minutes, seconds) * KM_PER_MILE)
}
