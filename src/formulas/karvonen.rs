//! Karvonen heart rate zones.
//!
//! Target HR = ((max_hr − resting_hr) × intensity) + resting_hr, evaluated at
//! the boundaries of five heart rate reserve (HRR) bands.

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite, ensure_positive, FormulaResult};

/// Intensity bands as (name, label, min fraction of HRR, max fraction of HRR).
pub const ZONE_BANDS: [(&str, &str, f64, f64); 5] = [
    ("Zone 1", "Recovery", 0.50, 0.60),
    ("Zone 2", "Endurance", 0.60, 0.70),
    ("Zone 3", "Tempo", 0.70, 0.80),
    ("Zone 4", "Threshold", 0.80, 0.90),
    ("Zone 5", "VO2max", 0.90, 1.00),
];

/// Where the maximum heart rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxHrSource {
    /// Estimated as 220 − age
    AgeEstimate,
    /// Entered by the user
    Custom,
}

impl std::fmt::Display for MaxHrSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaxHrSource::AgeEstimate => write!(f, "(220 - age)"),
            MaxHrSource::Custom => write!(f, "(custom)"),
        }
    }
}

/// A heart rate zone range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrZoneRange {
    /// Zone number (1-5)
    pub zone: u8,
    /// Zone name ("Zone 1")
    pub name: String,
    /// Zone label ("Recovery")
    pub label: String,
    /// Lower HRR fraction
    pub min_intensity: f64,
    /// Upper HRR fraction
    pub max_intensity: f64,
    /// Minimum BPM
    pub min_bpm: i32,
    /// Maximum BPM
    pub max_bpm: i32,
}

/// Karvonen 5-zone heart rate zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KarvonenZones {
    /// Maximum heart rate used for the calculation
    pub max_hr: f64,
    /// Resting heart rate used for the calculation
    pub resting_hr: f64,
    /// Zone 1: Recovery (50-60% HRR)
    pub z1_recovery: HrZoneRange,
    /// Zone 2: Endurance (60-70% HRR)
    pub z2_endurance: HrZoneRange,
    /// Zone 3: Tempo (70-80% HRR)
    pub z3_tempo: HrZoneRange,
    /// Zone 4: Threshold (80-90% HRR)
    pub z4_threshold: HrZoneRange,
    /// Zone 5: VO2max (90-100% HRR)
    pub z5_vo2max: HrZoneRange,
}

/// Estimate maximum heart rate as 220 − age.
pub fn max_hr_from_age(age: f64) -> FormulaResult<f64> {
    let age = ensure_positive("age", age)?;
    Ok(220.0 - age)
}

/// Pick the maximum heart rate for the form: a positive custom value wins,
/// otherwise the age estimate is used.
pub fn resolve_max_hr(age: f64, custom_max_hr: Option<f64>) -> FormulaResult<(f64, MaxHrSource)> {
    match custom_max_hr {
        Some(custom) if custom.is_finite() && custom > 0.0 => Ok((custom, MaxHrSource::Custom)),
        _ => max_hr_from_age(age).map(|hr| (hr, MaxHrSource::AgeEstimate)),
    }
}

/// Target heart rate for a given intensity, rounded to whole beats.
pub fn karvonen_hr(max_hr: f64, resting_hr: f64, intensity: f64) -> i32 {
    ((max_hr - resting_hr) * intensity + resting_hr).round() as i32
}

impl KarvonenZones {
    /// Calculate the five zones from maximum and resting heart rate.
    pub fn calculate(max_hr: f64, resting_hr: f64) -> FormulaResult<Self> {
        let max_hr = ensure_finite("max heart rate", max_hr)?;
        let resting_hr = ensure_finite("resting heart rate", resting_hr)?;

        let zone = |index: usize| -> HrZoneRange {
            let (name, label, min, max) = ZONE_BANDS[index];
            HrZoneRange {
                zone: index as u8 + 1,
                name: name.to_string(),
                label: label.to_string(),
                min_intensity: min,
                max_intensity: max,
                min_bpm: karvonen_hr(max_hr, resting_hr, min),
                max_bpm: karvonen_hr(max_hr, resting_hr, max),
            }
        };

        Ok(Self {
            max_hr,
            resting_hr,
            z1_recovery: zone(0),
            z2_endurance: zone(1),
            z3_tempo: zone(2),
            z4_threshold: zone(3),
            z5_vo2max: zone(4),
        })
    }

    /// Heart rate reserve (max − resting).
    pub fn reserve(&self) -> f64 {
        self.max_hr - self.resting_hr
    }

    /// Get the zone for a given heart rate value (0 when below zone 1).
    pub fn zone_for(&self, hr: i32) -> u8 {
        if hr < self.z1_recovery.min_bpm {
            0
        } else if hr < self.z2_endurance.min_bpm {
            1
        } else if hr < self.z3_tempo.min_bpm {
            2
        } else if hr < self.z4_threshold.min_bpm {
            3
        } else if hr < self.z5_vo2max.min_bpm {
            4
        } else {
            5
        }
    }

    /// Get the zone range for a given zone number (1-5).
    pub fn get_zone_range(&self, zone: u8) -> Option<&HrZoneRange> {
        match zone {
            1 => Some(&self.z1_recovery),
            2 => Some(&self.z2_endurance),
            3 => Some(&self.z3_tempo),
            4 => Some(&self.z4_threshold),
            5 => Some(&self.z5_vo2max),
            _ => None,
        }
    }

    /// Get all zones as a vector.
    pub fn all_zones(&self) -> Vec<&HrZoneRange> {
        vec![
            &self.z1_recovery,
            &self.z2_endurance,
            &self.z3_tempo,
            &self.z4_threshold,
            &self.z5_vo2max,
        ]
    }
}
