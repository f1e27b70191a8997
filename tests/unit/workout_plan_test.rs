//! Unit tests for HIIT plan generation.

use rustrun::workouts::{
    build_plan, format_duration, stats, HiitGoal, IntervalKind, PlanExport, WorkRestRatio,
    WorkoutError, WorkoutPlan,
};

fn assert_plan_shape(plan: &WorkoutPlan) {
    let intervals = plan.intervals();
    let last = intervals.len() - 1;

    assert_eq!(intervals[0].kind(), IntervalKind::Warmup);
    assert_eq!(intervals[last].kind(), IntervalKind::Cooldown);

    // Work and rest alternate, starting and ending with work
    for (i, interval) in intervals[1..last].iter().enumerate() {
        let expected = if i % 2 == 0 {
            IntervalKind::Work
        } else {
            IntervalKind::Rest
        };
        assert_eq!(interval.kind(), expected, "interval {}", i + 1);
    }
    assert_eq!(intervals[last - 1].kind(), IntervalKind::Work);
}

#[test]
fn test_every_goal_and_duration_has_valid_shape() {
    for goal in HiitGoal::ALL {
        for minutes in 1..=60u32 {
            let Ok(plan) = build_plan(goal, f64::from(minutes), None) else {
                continue;
            };
            assert_plan_shape(&plan);

            let preset = goal.preset();
            let fixed = i64::from(preset.warmup_seconds + preset.cooldown_seconds);
            let available = i64::from(minutes) * 60 - fixed;
            let cycle = i64::from(preset.work_seconds + preset.rest_seconds);
            let expected = available / cycle;

            let stats = stats(&plan);
            assert_eq!(stats.work_intervals as i64, expected, "{} {}", goal, minutes);
            assert!(plan.total_duration_minutes() <= f64::from(minutes));
        }
    }
}

#[test]
fn test_total_duration_is_sum_of_intervals() {
    let plan = build_plan(HiitGoal::Power, 45.0, None).unwrap();
    let seconds: u32 = plan.intervals().iter().map(|i| i.duration_seconds()).sum();
    assert!((plan.total_duration_minutes() - f64::from(seconds) / 60.0).abs() < 1e-9);

    // 2700 - 420 - 300 = 1980 s, 80 s cycles -> 24 efforts, 23 rests
    let stats = stats(&plan);
    assert_eq!(stats.work_intervals, 24);
    assert_eq!(stats.total_work_seconds, 24 * 20);
    assert_eq!(stats.total_rest_seconds, 23 * 60);
    assert_eq!(seconds, 420 + 480 + 1380 + 300);
}

#[test]
fn test_preset_warmup_and_cooldown() {
    let cases = [
        (HiitGoal::Beginner, 300, 300),
        (HiitGoal::FatBurn, 300, 180),
        (HiitGoal::Endurance, 300, 300),
        (HiitGoal::Power, 420, 300),
    ];

    for (goal, warmup, cooldown) in cases {
        let plan = build_plan(goal, 30.0, None).unwrap();
        let intervals = plan.intervals();
        assert_eq!(intervals[0].duration_seconds(), warmup);
        assert_eq!(intervals[intervals.len() - 1].duration_seconds(), cooldown);
        assert_eq!(plan.name(), goal.preset().name);
        assert!(intervals[0].intensity().is_some());
    }
}

#[test]
fn test_custom_ratio_uses_goal_base() {
    // Fat burn counts ratio units in 30 s
    let plan = build_plan(HiitGoal::FatBurn, 20.0, Some("2:1")).unwrap();
    let work = plan.intervals_of(IntervalKind::Work).next().unwrap();
    let rest = plan.intervals_of(IntervalKind::Rest).next().unwrap();
    assert_eq!(work.duration_seconds(), 60);
    assert_eq!(rest.duration_seconds(), 30);

    // 720 s / 90 s -> 8 efforts
    let stats = stats(&plan);
    assert_eq!(stats.work_intervals, 8);
    assert_eq!(stats.ratio, "2:1");

    // Beginner counts them in 20 s
    let plan = build_plan(HiitGoal::Beginner, 30.0, Some("1:3")).unwrap();
    let rest = plan.intervals_of(IntervalKind::Rest).next().unwrap();
    assert_eq!(rest.duration_seconds(), 60);
}

#[test]
fn test_ratio_parsing() {
    assert_eq!(
        "2:1".parse::<WorkRestRatio>(),
        Ok(WorkRestRatio { work: 2, rest: 1 })
    );
    assert_eq!(
        " 3 : 1 ".parse::<WorkRestRatio>(),
        Ok(WorkRestRatio { work: 3, rest: 1 })
    );
    assert_eq!(WorkRestRatio { work: 1, rest: 2 }.to_string(), "1:2");

    for bad in ["", "2", "1:0", "0:1", "a:b", "-1:2", "1:1:1", "1.5:1"] {
        assert!(
            matches!(bad.parse::<WorkRestRatio>(), Err(WorkoutError::InvalidRatio(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_invalid_ratio_matches_preset_plan() {
    let preset = build_plan(HiitGoal::Power, 25.0, None).unwrap();
    for bad in ["nonsense", "0:0", "3"] {
        let plan = build_plan(HiitGoal::Power, 25.0, Some(bad)).unwrap();
        assert_eq!(plan, preset);
    }
}

#[test]
fn test_duration_bounds() {
    assert!(matches!(
        build_plan(HiitGoal::FatBurn, -5.0, None),
        Err(WorkoutError::InvalidDuration(_))
    ));
    assert!(matches!(
        build_plan(HiitGoal::FatBurn, f64::NAN, None),
        Err(WorkoutError::InvalidDuration(_))
    ));
    assert!(matches!(
        build_plan(HiitGoal::FatBurn, 60.5, None),
        Err(WorkoutError::InvalidDuration(_))
    ));
    assert!(build_plan(HiitGoal::FatBurn, 60.0, None).is_ok());
}

#[test]
fn test_insufficient_time() {
    // Exactly warmup + cooldown leaves nothing
    assert!(matches!(
        build_plan(HiitGoal::FatBurn, 8.0, None),
        Err(WorkoutError::InsufficientTime(_))
    ));
    // 30 s left is less than one 60 s cycle
    assert!(matches!(
        build_plan(HiitGoal::FatBurn, 8.5, None),
        Err(WorkoutError::InsufficientTime(_))
    ));
    assert!(build_plan(HiitGoal::FatBurn, 9.0, None).is_ok());
}

#[test]
fn test_fractional_minutes_round_down() {
    // 779 s - 480 s = 299 s -> four 60 s cycles
    let plan = build_plan(HiitGoal::FatBurn, 12.99, None).unwrap();
    assert_eq!(stats(&plan).work_intervals, 4);
}

#[test]
fn test_goal_parsing() {
    assert_eq!("Fat-Burn".parse::<HiitGoal>(), Ok(HiitGoal::FatBurn));
    assert_eq!(" power ".parse::<HiitGoal>(), Ok(HiitGoal::Power));
    assert!(matches!(
        "fatburn".parse::<HiitGoal>(),
        Err(WorkoutError::InvalidWorkout(_))
    ));
    assert_eq!(HiitGoal::default(), HiitGoal::FatBurn);
}

#[test]
fn test_export_json_layout() {
    let plan = build_plan(HiitGoal::FatBurn, 20.0, None).unwrap();
    let json = PlanExport::new(HiitGoal::FatBurn, 20.0, &plan)
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["requested_minutes"], 20.0);
    assert_eq!(value["plan"]["total_duration_minutes"], 19.5);
    assert_eq!(value["stats"]["work_intervals"], 12);
    assert!(value["generated_at"].is_string());

    let intervals = value["plan"]["intervals"].as_array().unwrap();
    assert_eq!(intervals.len(), 25);
    assert_eq!(intervals[1]["kind"], "work");
    assert_eq!(intervals[1]["duration_seconds"], 30);
    assert_eq!(intervals[2]["kind"], "rest");
    assert_eq!(intervals[24]["kind"], "cooldown");
}

#[test]
fn test_format_duration_values() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(59), "59s");
    assert_eq!(format_duration(60), "1m");
    assert_eq!(format_duration(420), "7m");
    assert_eq!(format_duration(3661), "61m 1s");
}
