//! Unit tests for the running formulas.

use rustrun::formulas::{
    calculate_vdot, convert_pace_to_km, convert_pace_to_miles, format_pace, format_race_time,
    hms_to_seconds, magic_mile_predictions, maffetone_range, maffetone_range_for,
    predict_race_time, riegel_time, training_paces, FormulaError, Pace, PaceDirection,
    TrainingStatus, VdotReport,
};

#[test]
fn test_maffetone_range_for_any_adjustment() {
    for age in [18.0, 30.0, 45.0, 70.0] {
        for adjustment in [-10, -5, 0, 5] {
            let range = maffetone_range(age, adjustment).unwrap();
            let base = 180.0 - age + adjustment as f64;
            assert_eq!(range.high, base);
            assert_eq!(range.low, base - 10.0);
        }
    }
}

#[test]
fn test_maffetone_status_adjustments() {
    let recovering = maffetone_range_for(40.0, TrainingStatus::Recovering).unwrap();
    let seasoned = maffetone_range_for(40.0, TrainingStatus::Seasoned).unwrap();

    assert_eq!(recovering.to_string(), "120-130 bpm");
    assert_eq!(seasoned.to_string(), "135-145 bpm");
}

#[test]
fn test_maffetone_rejects_bad_age() {
    assert!(matches!(
        maffetone_range(0.0, 0),
        Err(FormulaError::InvalidInput(_))
    ));
    assert!(maffetone_range(f64::NAN, 0).is_err());
}

#[test]
fn test_riegel_identity_and_monotonic() {
    assert_eq!(riegel_time(5.0, 1200.0, 5.0).unwrap(), 1200.0);

    let ten = riegel_time(5.0, 1200.0, 10.0).unwrap();
    let half = riegel_time(5.0, 1200.0, 21.0975).unwrap();
    assert!(ten > 2400.0, "longer races slow down, got {}", ten);
    assert!(half > ten);
}

#[test]
fn test_riegel_rejects_non_positive() {
    assert!(riegel_time(0.0, 1200.0, 10.0).is_err());
    assert!(riegel_time(5.0, -1.0, 10.0).is_err());
    assert!(riegel_time(5.0, 1200.0, 0.0).is_err());
}

#[test]
fn test_vdot_prediction_round_trip() {
    let cases = [
        (400.0, 60.0),
        (800.0, 150.0),
        (1500.0, 300.0),
        (1609.344, 279.0),
        (1609.344, 360.0),
        (5000.0, 1200.0),
        (10_000.0, 2700.0),
        (42_195.0, 12_600.0),
    ];
    for (distance, time) in cases {
        let vdot = calculate_vdot(distance, time).unwrap();
        let predicted = predict_race_time(vdot, distance).unwrap();
        assert!(
            (predicted - time).abs() < 1.0,
            "{}m: expected {}, got {}",
            distance,
            time,
            predicted
        );
    }
}

#[test]
fn test_training_paces_get_faster() {
    let paces = training_paces(50.0).unwrap();
    assert_eq!(paces.len(), 5);
    assert_eq!(paces[0].name, "Easy (E)");

    for pair in paces.windows(2) {
        assert!(pair[1].pace_seconds_per_km < pair[0].pace_seconds_per_km);
    }
}

#[test]
fn test_vdot_report_predictions() {
    let report = VdotReport::from_performance(5000.0, 1200.0).unwrap();
    let five_k = &report.predictions[0];

    assert!((five_k.time_seconds - 1200.0).abs() < 1.0);
    assert!((five_k.pace_seconds_per_km - 240.0).abs() < 0.5);
}

#[test]
fn test_vdot_rejects_zero_time() {
    assert!(calculate_vdot(5000.0, 0.0).is_err());
    assert!(VdotReport::from_performance(0.0, 1200.0).is_err());
}

#[test]
fn test_magic_mile_seven_minutes() {
    let predictions = magic_mile_predictions(420.0).unwrap();

    assert_eq!(format_pace(predictions[0].pace_per_mile), "7:33");
    assert_eq!(format_pace(predictions[4].pace_per_mile), "9:06");
    assert_eq!(predictions[2].label, "10 Mile");
    assert_eq!(format_race_time(predictions[2].total_time), "1:22:15");
}

#[test]
fn test_pace_round_trip_within_a_second() {
    for (minutes, seconds) in [(10.0, 0.0), (6.0, 0.0), (8.0, 30.0)] {
        let km = convert_pace_to_km(minutes, seconds);
        let back = convert_pace_to_miles(f64::from(km.minutes), f64::from(km.seconds));
        let original = minutes * 60.0 + seconds;
        let round_trip = f64::from(back.minutes * 60 + back.seconds);
        assert!(
            (round_trip - original).abs() <= 1.0,
            "{}:{} came back as {}",
            minutes,
            seconds,
            back
        );
    }
}

#[test]
fn test_pace_direction_and_carry() {
    assert_eq!(PaceDirection::MileToKm.convert(10.0, 0.0), Pace::new(6, 13));
    assert_eq!(PaceDirection::KmToMile.convert(4.0, 0.0), Pace::new(6, 26));
    assert_eq!(Pace::from_total_minutes(4.9999), Pace::new(5, 0));
    assert_eq!(Pace::from_total_minutes(-3.0), Pace::new(0, 0));
}

#[test]
fn test_time_formatting() {
    assert_eq!(format_race_time(3723.0), "1:02:03");
    assert_eq!(format_race_time(59.6), "1:00");
    assert_eq!(format_race_time(f64::NAN), "--:--:--");
    assert_eq!(format_pace(f64::INFINITY), "--:--");
    assert_eq!(hms_to_seconds("1", "", "5"), 3605);
}
