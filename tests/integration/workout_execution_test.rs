//! Integration tests for running workouts against a clock.
//!
//! Tests the end-to-end flow:
//! 1. Generate a HIIT plan or take the strength routine
//! 2. Build a sequencer and wrap it in a clock-driven timer
//! 3. Advance a manual clock and check what the timer reports

use std::time::Duration;

use rustrun::audio::{cues_for, CuePattern};
use rustrun::workouts::{
    build_plan, strength_routine, HiitGoal, IntervalKind, IntervalSequencer, IntervalTimer,
    ManualClock, SequencerEvent, TimerStatus,
};

fn plan_timer(clock: &ManualClock) -> IntervalTimer<ManualClock> {
    let plan = build_plan(HiitGoal::FatBurn, 20.0, None).unwrap();
    let sequencer = IntervalSequencer::from_plan(&plan).unwrap();
    IntervalTimer::new(sequencer, clock.clone())
}

/// Test that the warmup of a generated plan hands over to the first effort.
#[test]
fn test_plan_warmup_to_work() {
    let clock = ManualClock::new();
    let mut timer = plan_timer(&clock);
    timer.start();

    clock.advance_secs(299);
    let events = timer.update();
    assert_eq!(timer.sequencer().remaining_seconds(), 1);
    assert_eq!(cues_for(&events), vec![CuePattern::CountdownTick]);

    clock.advance_secs(1);
    let events = timer.update();
    assert_eq!(
        events,
        vec![SequencerEvent::IntervalStarted { index: 1, round: 1 }]
    );
    assert_eq!(timer.sequencer().current_interval().kind, IntervalKind::Work);
    assert_eq!(timer.sequencer().remaining_seconds(), 30);
}

/// Test that partial seconds accumulate into whole ticks.
#[test]
fn test_sub_second_updates() {
    let clock = ManualClock::new();
    let mut timer = plan_timer(&clock);
    timer.start();

    for _ in 0..3 {
        clock.advance(Duration::from_millis(400));
        timer.update();
    }
    // 1.2 s elapsed
    assert_eq!(timer.sequencer().remaining_seconds(), 299);
    assert_eq!(timer.until_next_tick(), Some(Duration::from_millis(800)));
}

/// Test that a paused timer ignores the clock and resumes from where it was.
#[test]
fn test_pause_and_resume_against_clock() {
    let clock = ManualClock::new();
    let mut timer = plan_timer(&clock);
    timer.start();

    clock.advance(Duration::from_millis(10_500));
    timer.update();
    assert_eq!(timer.sequencer().remaining_seconds(), 290);

    timer.pause();
    assert!(!timer.is_ticking());
    assert_eq!(timer.until_next_tick(), None);
    clock.advance_secs(120);
    assert!(timer.update().is_empty());
    assert_eq!(timer.sequencer().status(), TimerStatus::Paused);

    // The half second before the pause is not carried over
    timer.start();
    clock.advance(Duration::from_millis(500));
    timer.update();
    assert_eq!(timer.sequencer().remaining_seconds(), 290);
    clock.advance(Duration::from_millis(500));
    timer.update();
    assert_eq!(timer.sequencer().remaining_seconds(), 289);
}

/// Test that skipping gives the new interval a full first second.
#[test]
fn test_skip_rearms_tick() {
    let clock = ManualClock::new();
    let mut timer = plan_timer(&clock);
    timer.start();

    clock.advance(Duration::from_millis(700));
    timer.update();
    timer.skip_interval();
    assert_eq!(timer.until_next_tick(), Some(Duration::from_secs(1)));

    clock.advance(Duration::from_millis(999));
    timer.update();
    assert_eq!(timer.sequencer().remaining_seconds(), 30);

    clock.advance(Duration::from_millis(1));
    timer.update();
    assert_eq!(timer.sequencer().remaining_seconds(), 29);
}

/// Test a whole generated plan in one jump.
#[test]
fn test_plan_runs_to_completion() {
    let clock = ManualClock::new();
    let mut timer = plan_timer(&clock);
    timer.start();

    clock.advance_secs(1169);
    timer.update();
    assert!(timer.sequencer().is_running());
    assert_eq!(timer.sequencer().current_interval().kind, IntervalKind::Cooldown);

    clock.advance_secs(1);
    let events = timer.update();
    assert_eq!(events, vec![SequencerEvent::Completed]);
    assert!(timer.sequencer().is_complete());
    assert!(!timer.is_ticking());

    // Extra time after completion changes nothing
    clock.advance_secs(60);
    assert!(timer.update().is_empty());
}

/// Test the strength routine second by second through both rounds.
#[test]
fn test_strength_routine_second_by_second() {
    let clock = ManualClock::new();
    let sequencer = strength_routine().sequencer().unwrap();
    let mut timer = IntervalTimer::new(sequencer, clock.clone());
    timer.start();

    let mut events = Vec::new();
    for second in 1..=600 {
        clock.advance_secs(1);
        events.extend(timer.update());
        if second < 600 {
            assert!(!timer.sequencer().is_complete(), "complete at {}", second);
        }
    }

    assert!(timer.sequencer().is_complete());
    assert!(events.contains(&SequencerEvent::RoundStarted { round: 2 }));
    assert_eq!(events.last(), Some(&SequencerEvent::Completed));
}

/// Test that reset stops ticking and restores the first interval.
#[test]
fn test_reset_mid_session() {
    let clock = ManualClock::new();
    let sequencer = strength_routine().sequencer().unwrap();
    let mut timer = IntervalTimer::new(sequencer, clock.clone());
    timer.start();

    clock.advance_secs(75);
    timer.update();
    assert_eq!(timer.sequencer().current_interval().name, "Push-ups");

    timer.reset();
    assert!(!timer.is_ticking());
    clock.advance_secs(10);
    timer.update();

    assert!(timer.sequencer().is_at_start());
    assert_eq!(timer.sequencer().status(), TimerStatus::Idle);
    assert_eq!(timer.sequencer().remaining_seconds(), 40);
}
