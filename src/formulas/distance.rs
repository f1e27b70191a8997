//! Standard race distances used by the preset buttons and prediction tables.

use serde::{Deserialize, Serialize};

/// Kilometres per mile, exact by definition.
pub const KM_PER_MILE: f64 = 1.609344;

/// Standard race distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    FiveK,
    TenK,
    HalfMarathon,
    Marathon,
}

impl RaceDistance {
    /// Distances shown by the distance preset buttons.
    pub const PRESETS: [RaceDistance; 4] = [
        RaceDistance::FiveK,
        RaceDistance::TenK,
        RaceDistance::HalfMarathon,
        RaceDistance::Marathon,
    ];

    /// Distance in kilometres.
    pub fn km(&self) -> f64 {
        match self {
            RaceDistance::FiveK => 5.0,
            RaceDistance::TenK => 10.0,
            RaceDistance::HalfMarathon => 21.0975,
            RaceDistance::Marathon => 42.195,
        }
    }

    /// Distance in metres.
    pub fn meters(&self) -> f64 {
        self.km() * 1000.0
    }

    /// Short label for preset buttons.
    pub fn short_label(&self) -> &'static str {
        match self {
            RaceDistance::FiveK => "5K",
            RaceDistance::TenK => "10K",
            RaceDistance::HalfMarathon => "Half",
            RaceDistance::Marathon => "Full",
        }
    }
}

impl std::fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaceDistance::FiveK => write!(f, "5K"),
            RaceDistance::TenK => write!(f, "10K"),
            RaceDistance::HalfMarathon => write!(f, "Half Marathon"),
            RaceDistance::Marathon => write!(f, "Marathon"),
        }
    }
}
