//! Jack Daniels' VDOT calculations.
//!
//! Two closed forms relate running speed and race duration to oxygen uptake:
//! - Oxygen cost: VO2(v) = −4.60 + 0.182258·v + 0.000104·v² (v in m/min)
//! - Sustainable fraction: %VO2max(t) = 0.8 + 0.1894393·e^(−0.012778·t)
//!   + 0.2989558·e^(−0.1932605·t) (t in minutes)
//!
//! VDOT is their ratio for a race performance. Predicting a race time inverts
//! the relationship with Newton's method.

use serde::{Deserialize, Serialize};

use super::distance::RaceDistance;
use super::error::{ensure_positive, FormulaError, FormulaResult};

const VO2_INTERCEPT: f64 = -4.60;
const VO2_LINEAR: f64 = 0.182258;
const VO2_QUADRATIC: f64 = 0.000104;

const PCT_BASE: f64 = 0.8;
const PCT_SLOW_COEF: f64 = 0.1894393;
const PCT_SLOW_RATE: f64 = 0.012778;
const PCT_FAST_COEF: f64 = 0.2989558;
const PCT_FAST_RATE: f64 = 0.1932605;

/// Newton solve starting guess in minutes.
const INITIAL_GUESS_MINUTES: f64 = 10.0;
/// Maximum Newton iterations.
const MAX_ITERATIONS: usize = 20;
/// Convergence threshold on the step size, in minutes.
const TOLERANCE_MINUTES: f64 = 1e-5;

/// Training intensities as (name, description, fraction of VDOT).
pub const TRAINING_INTENSITIES: [(&str, &str, f64); 5] = [
    ("Easy (E)", "Aerobic development, recovery", 0.70),
    ("Marathon (M)", "Marathon goal pace", 0.80),
    ("Threshold (T)", "Lactate threshold", 0.88),
    ("Interval (I)", "VO2max development", 0.98),
    ("Repetition (R)", "Economy and speed", 1.10),
];

/// Oxygen cost (ml/kg/min) of running at `velocity` metres per minute.
pub fn oxygen_cost(velocity: f64) -> f64 {
    VO2_INTERCEPT + VO2_LINEAR * velocity + VO2_QUADRATIC * velocity.powi(2)
}

/// Fraction of VO2max sustainable for a race lasting `minutes`.
pub fn percent_vo2max(minutes: f64) -> f64 {
    PCT_BASE
        + PCT_SLOW_COEF * (-PCT_SLOW_RATE * minutes).exp()
        + PCT_FAST_COEF * (-PCT_FAST_RATE * minutes).exp()
}

/// d/dt of [`percent_vo2max`].
fn percent_vo2max_slope(minutes: f64) -> f64 {
    -PCT_SLOW_RATE * PCT_SLOW_COEF * (-PCT_SLOW_RATE * minutes).exp()
        - PCT_FAST_RATE * PCT_FAST_COEF * (-PCT_FAST_RATE * minutes).exp()
}

/// Calculate VDOT from a race distance (metres) and time (seconds).
pub fn calculate_vdot(distance_meters: f64, time_seconds: f64) -> FormulaResult<f64> {
    let distance = ensure_positive("distance", distance_meters)?;
    let seconds = ensure_positive("time", time_seconds)?;

    let minutes = seconds / 60.0;
    let velocity = distance / minutes;

    Ok(oxygen_cost(velocity) / percent_vo2max(minutes))
}

/// Speed (m/min) whose oxygen cost equals `target_vo2`.
///
/// Solves 0.000104·v² + 0.182258·v − (4.60 + VO2) = 0 and keeps the positive
/// root.
pub fn velocity_for_vo2(target_vo2: f64) -> FormulaResult<f64> {
    let a = VO2_QUADRATIC;
    let b = VO2_LINEAR;
    let c = VO2_INTERCEPT - target_vo2;

    let discriminant = b * b - 4.0 * a * c;
    if !discriminant.is_finite() || discriminant < 0.0 {
        return Err(FormulaError::InvalidInput(format!(
            "no running speed has an oxygen cost of {}",
            target_vo2
        )));
    }

    let velocity = (-b + discriminant.sqrt()) / (2.0 * a);
    if velocity > 0.0 {
        Ok(velocity)
    } else {
        Err(FormulaError::InvalidInput(format!(
            "oxygen cost {} is below resting",
            target_vo2
        )))
    }
}

/// Predict the race time in seconds for `distance_meters` at a given VDOT.
///
/// Solves VDOT·%VO2max(t) − VO2(D/t) = 0 for t with a damped Newton's
/// method: steps that would make t non-positive are halved.
pub fn predict_race_time(vdot: f64, distance_meters: f64) -> FormulaResult<f64> {
    let vdot = ensure_positive("VDOT", vdot)?;
    let distance = ensure_positive("distance", distance_meters)?;

    let mut t = INITIAL_GUESS_MINUTES;
    for iteration in 0..MAX_ITERATIONS {
        let velocity = distance / t;
        let f = vdot * percent_vo2max(t) - oxygen_cost(velocity);

        // dVO2/dt = dVO2/dv · dv/dt, with dv/dt = −D/t²
        let cost_slope = VO2_LINEAR + 2.0 * VO2_QUADRATIC * velocity;
        let df = vdot * percent_vo2max_slope(t) + cost_slope * distance / (t * t);

        if !df.is_finite() || !f.is_finite() {
            return Err(FormulaError::NoConvergence(format!(
                "degenerate derivative at iteration {}",
                iteration
            )));
        }

        // f rises through the root; a flat or falling slope means the guess
        // is far off, so halve or double t toward it instead
        let mut step = if df > 0.0 {
            f / df
        } else if f > 0.0 {
            t / 2.0
        } else {
            -t
        };
        while t - step <= 0.0 {
            step /= 2.0;
        }
        t -= step;

        if step.abs() < TOLERANCE_MINUTES {
            tracing::trace!("VDOT solve converged after {} iterations", iteration + 1);
            return Ok(t * 60.0);
        }
    }

    Err(FormulaError::NoConvergence(format!(
        "no solution for {} m at VDOT {:.1} within {} iterations",
        distance, vdot, MAX_ITERATIONS
    )))
}

/// A training pace derived from VDOT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPace {
    /// Pace name, e.g. "Easy (E)"
    pub name: String,
    /// Purpose of the pace
    pub description: String,
    /// Fraction of VDOT
    pub vdot_percent: f64,
    /// Pace in seconds per kilometre
    pub pace_seconds_per_km: f64,
}

/// Training paces at the fixed VDOT fractions.
pub fn training_paces(vdot: f64) -> FormulaResult<Vec<TrainingPace>> {
    let vdot = ensure_positive("VDOT", vdot)?;

    TRAINING_INTENSITIES
        .iter()
        .map(|&(name, description, fraction)| {
            let velocity = velocity_for_vo2(vdot * fraction)?;
            Ok(TrainingPace {
                name: name.to_string(),
                description: description.to_string(),
                vdot_percent: fraction,
                pace_seconds_per_km: 1000.0 / velocity * 60.0,
            })
        })
        .collect()
}

/// Predicted performance at a standard distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Distance predicted
    pub distance: RaceDistance,
    /// Predicted time in seconds
    pub time_seconds: f64,
    /// Average pace in seconds per kilometre
    pub pace_seconds_per_km: f64,
}

/// Predicted times for the standard race distances.
pub fn race_predictions(vdot: f64) -> FormulaResult<Vec<RacePrediction>> {
    RaceDistance::PRESETS
        .iter()
        .map(|&distance| {
            let time_seconds = predict_race_time(vdot, distance.meters())?;
            Ok(RacePrediction {
                distance,
                time_seconds,
                pace_seconds_per_km: time_seconds / distance.km(),
            })
        })
        .collect()
}

/// Everything the VDOT screen shows for one performance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VdotReport {
    /// VDOT score
    pub vdot: f64,
    /// Training paces
    pub paces: Vec<TrainingPace>,
    /// Equivalent race performances
    pub predictions: Vec<RacePrediction>,
}

impl VdotReport {
    /// Build a report from a race distance (metres) and time (seconds).
    pub fn from_performance(distance_meters: f64, time_seconds: f64) -> FormulaResult<Self> {
        let vdot = calculate_vdot(distance_meters, time_seconds)?;
        Ok(Self {
            vdot,
            paces: training_paces(vdot)?,
            predictions: race_predictions(vdot)?,
        })
    }
}
