//! Riegel race-time prediction: T2 = T1 × (D2 / D1)^1.06.

use super::error::{ensure_positive, FormulaResult};

/// Fatigue exponent of the power law.
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Predict the time (same unit as `known_time`) for `target_distance` from a
/// known performance. Distances only need to share a unit.
pub fn riegel_time(
    known_distance: f64,
    known_time: f64,
    target_distance: f64,
) -> FormulaResult<f64> {
    let d1 = ensure_positive("known distance", known_distance)?;
    let t1 = ensure_positive("known time", known_time)?;
    let d2 = ensure_positive("target distance", target_distance)?;

    Ok(t1 * (d2 / d1).powf(RIEGEL_EXPONENT))
}

/// Average pace in seconds per unit of `distance`.
pub fn pace_per_unit(seconds: f64, distance: f64) -> FormulaResult<f64> {
    let seconds = ensure_positive("time", seconds)?;
    let distance = ensure_positive("distance", distance)?;
    Ok(seconds / distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_distance() {
        assert_eq!(riegel_time(10.0, 3000.0, 10.0), Ok(3000.0));
    }

    #[test]
    fn test_half_marathon_from_10k() {
        // 10K in 50:00 -> half marathon in about 1:50:19
        let t = riegel_time(10.0, 3000.0, 21.0975).unwrap();
        assert!((t - 6619.2).abs() < 1.0, "got {}", t);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(riegel_time(0.0, 3000.0, 5.0).is_err());
        assert!(riegel_time(10.0, -1.0, 5.0).is_err());
        assert!(riegel_time(10.0, 3000.0, 0.0).is_err());
        assert!(pace_per_unit(3000.0, 0.0).is_err());
    }
}
