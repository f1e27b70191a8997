//! Unit tests for Karvonen heart rate zones.

use rustrun::formulas::karvonen::{karvonen_hr, max_hr_from_age, ZONE_BANDS};
use rustrun::formulas::{resolve_max_hr, KarvonenZones, MaxHrSource};
use rustrun::ui::theme::zone_colors::{hr_zone_color, Z1_RECOVERY, Z5_VO2MAX};

#[test]
fn test_zones_age_30_resting_60() {
    let (max_hr, source) = resolve_max_hr(30.0, None).unwrap();
    assert_eq!(max_hr, 190.0);
    assert_eq!(source, MaxHrSource::AgeEstimate);

    let zones = KarvonenZones::calculate(max_hr, 60.0).unwrap();

    // Z1: 50-60% of 130 bpm reserve
    assert_eq!(zones.z1_recovery.min_bpm, 125);
    assert_eq!(zones.z1_recovery.max_bpm, 138);
    assert_eq!(zones.z1_recovery.label, "Recovery");

    assert_eq!(zones.z3_tempo.min_bpm, 151);
    assert_eq!(zones.z3_tempo.max_bpm, 164);

    // Z5 tops out at max HR
    assert_eq!(zones.z5_vo2max.max_bpm, 190);
    assert_eq!(zones.reserve(), 130.0);
}

#[test]
fn test_zone_boundaries_non_decreasing() {
    for (max_hr, resting) in [(190.0, 60.0), (175.0, 48.0), (201.0, 72.0), (150.0, 149.0)] {
        let zones = KarvonenZones::calculate(max_hr, resting).unwrap();
        let all = zones.all_zones();
        assert_eq!(all.len(), ZONE_BANDS.len());

        for pair in all.windows(2) {
            assert!(pair[0].min_bpm <= pair[1].min_bpm);
            assert!(pair[0].max_bpm <= pair[1].min_bpm);
        }
        for zone in all {
            assert!(zone.min_bpm <= zone.max_bpm);
        }
    }
}

#[test]
fn test_custom_max_overrides_age() {
    let (max_hr, source) = resolve_max_hr(30.0, Some(200.0)).unwrap();
    assert_eq!(max_hr, 200.0);
    assert_eq!(source, MaxHrSource::Custom);
    assert_eq!(source.to_string(), "(custom)");

    // Non-positive override falls back to the age estimate
    let (max_hr, source) = resolve_max_hr(40.0, Some(0.0)).unwrap();
    assert_eq!(max_hr, 180.0);
    assert_eq!(source, MaxHrSource::AgeEstimate);
}

#[test]
fn test_invalid_inputs() {
    assert!(max_hr_from_age(0.0).is_err());
    assert!(resolve_max_hr(-5.0, None).is_err());
    assert!(KarvonenZones::calculate(f64::NAN, 60.0).is_err());
    assert!(KarvonenZones::calculate(190.0, f64::INFINITY).is_err());
}

#[test]
fn test_zone_lookup() {
    let zones = KarvonenZones::calculate(190.0, 60.0).unwrap();

    assert_eq!(zones.zone_for(100), 0);
    assert_eq!(zones.zone_for(125), 1);
    assert_eq!(zones.zone_for(150), 2);
    assert_eq!(zones.zone_for(180), 5);

    assert_eq!(zones.get_zone_range(4).unwrap().name, "Zone 4");
    assert!(zones.get_zone_range(6).is_none());
}

#[test]
fn test_karvonen_hr_rounds() {
    // 0.55 * 130 + 60 = 131.5 rounds away from zero
    assert_eq!(karvonen_hr(190.0, 60.0, 0.55), 132);
}

#[test]
fn test_zone_colors() {
    assert_eq!(hr_zone_color(1), Z1_RECOVERY);
    assert_eq!(hr_zone_color(5), Z5_VO2MAX);
}
