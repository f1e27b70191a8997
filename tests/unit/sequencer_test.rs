//! Unit tests for the countdown interval sequencer and cue mapping.

use rustrun::audio::{cue_for, cues_for, AudioConfig, CuePattern, CuePlayer};
use rustrun::workouts::{
    build_plan, strength_routine, HiitGoal, IntervalKind, IntervalSequencer, SequencerEvent,
    TimedInterval, TimerStatus, WorkoutError,
};

fn countdowns(events: &[SequencerEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            SequencerEvent::Countdown { seconds } => Some(*seconds),
            _ => None,
        })
        .collect()
}

fn strength_sequencer() -> IntervalSequencer {
    strength_routine().sequencer().unwrap()
}

#[test]
fn test_first_interval_counts_down_to_one() {
    let mut seq = strength_sequencer();
    seq.start();

    let mut events = Vec::new();
    for _ in 0..39 {
        events.extend(seq.tick());
    }

    assert_eq!(seq.remaining_seconds(), 1);
    assert_eq!(seq.state().plan_index, 0);
    assert_eq!(countdowns(&events), vec![3, 2, 1]);

    let events = seq.tick();
    assert_eq!(seq.state().plan_index, 1);
    assert_eq!(seq.remaining_seconds(), 20);
    assert_eq!(seq.current_interval().name, "Rest");
    assert_eq!(
        events,
        vec![SequencerEvent::IntervalStarted { index: 1, round: 1 }]
    );
}

#[test]
fn test_full_strength_session() {
    let mut seq = strength_sequencer();
    assert_eq!(seq.total_duration_seconds(), 600);
    seq.start();

    let mut events = Vec::new();
    for _ in 0..599 {
        events.extend(seq.tick());
    }
    assert!(seq.is_running());
    assert_eq!(seq.round(), 2);
    assert_eq!(seq.remaining_seconds(), 1);

    events.extend(seq.tick());
    assert!(seq.is_complete());
    assert_eq!(seq.remaining_seconds(), 0);

    let started = events
        .iter()
        .filter(|e| matches!(e, SequencerEvent::IntervalStarted { .. }))
        .count();
    let rounds: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, SequencerEvent::RoundStarted { .. }))
        .collect();

    assert_eq!(started, 19);
    assert_eq!(rounds, vec![&SequencerEvent::RoundStarted { round: 2 }]);
    assert_eq!(countdowns(&events).len(), 60);
    assert_eq!(events.last(), Some(&SequencerEvent::Completed));

    // Nothing moves once complete
    assert!(seq.tick().is_empty());
    assert!(seq.skip_interval().is_empty());
}

#[test]
fn test_round_rollover_events() {
    let mut seq = strength_sequencer();
    seq.start();
    for _ in 0..299 {
        seq.tick();
    }
    assert_eq!(seq.round(), 1);
    assert_eq!(seq.state().plan_index, 9);

    let events = seq.tick();
    assert_eq!(
        events,
        vec![
            SequencerEvent::RoundStarted { round: 2 },
            SequencerEvent::IntervalStarted { index: 0, round: 2 },
        ]
    );
    assert_eq!(seq.remaining_seconds(), 40);
    assert!((seq.progress() - 0.5).abs() < 1e-9);
}

#[test]
fn test_short_intervals_count_down_on_entry() {
    let mut seq = IntervalSequencer::new(
        vec![
            TimedInterval::new("Sprint", IntervalKind::Work, 3),
            TimedInterval::new("Breathe", IntervalKind::Rest, 1),
        ],
        1,
    )
    .unwrap();
    seq.start();

    assert_eq!(seq.tick(), vec![SequencerEvent::Countdown { seconds: 2 }]);
    assert_eq!(seq.tick(), vec![SequencerEvent::Countdown { seconds: 1 }]);
    assert_eq!(
        seq.tick(),
        vec![
            SequencerEvent::IntervalStarted { index: 1, round: 1 },
            SequencerEvent::Countdown { seconds: 1 },
        ]
    );
    assert_eq!(seq.tick(), vec![SequencerEvent::Completed]);
}

#[test]
fn test_pause_freezes_and_resume_continues() {
    let mut seq = strength_sequencer();
    seq.start();
    for _ in 0..10 {
        seq.tick();
    }

    seq.pause();
    assert_eq!(seq.status(), TimerStatus::Paused);
    for _ in 0..5 {
        assert!(seq.tick().is_empty());
    }
    assert_eq!(seq.remaining_seconds(), 30);

    // Pausing twice is harmless
    seq.pause();
    assert_eq!(seq.status(), TimerStatus::Paused);

    seq.start();
    assert_eq!(seq.status(), TimerStatus::Running);
    assert!(!seq.is_at_start());
    seq.tick();
    assert_eq!(seq.remaining_seconds(), 29);
}

#[test]
fn test_reset_from_second_round() {
    let mut seq = strength_sequencer();
    seq.start();
    for _ in 0..350 {
        seq.tick();
    }
    assert_eq!(seq.round(), 2);

    seq.reset();
    assert_eq!(seq.status(), TimerStatus::Idle);
    assert_eq!(seq.round(), 1);
    assert_eq!(seq.state().plan_index, 0);
    assert_eq!(seq.remaining_seconds(), 40);
    assert!(seq.is_at_start());
    assert_eq!(seq.progress(), 0.0);
}

#[test]
fn test_skip_keeps_status() {
    let mut seq = strength_sequencer();
    seq.start();
    seq.tick();

    let events = seq.skip_interval();
    assert_eq!(
        events,
        vec![SequencerEvent::IntervalStarted { index: 1, round: 1 }]
    );
    assert!(seq.is_running());
    assert_eq!(seq.remaining_seconds(), 20);

    seq.pause();
    seq.skip_interval();
    assert_eq!(seq.status(), TimerStatus::Paused);
    assert_eq!(seq.current_interval().name, "Push-ups");
}

#[test]
fn test_skip_past_last_interval_completes() {
    let mut seq = IntervalSequencer::new(
        vec![TimedInterval::new("Plank", IntervalKind::Work, 30)],
        2,
    )
    .unwrap();

    seq.skip_interval();
    assert_eq!(seq.round(), 2);
    assert_eq!(seq.skip_interval(), vec![SequencerEvent::Completed]);
    assert!(seq.is_complete());
    assert_eq!(seq.progress(), 1.0);
}

#[test]
fn test_progress_within_interval() {
    let mut seq = IntervalSequencer::new(
        vec![
            TimedInterval::new("Work", IntervalKind::Work, 10),
            TimedInterval::new("Rest", IntervalKind::Rest, 10),
        ],
        1,
    )
    .unwrap();
    seq.start();
    for _ in 0..5 {
        seq.tick();
    }
    assert!((seq.progress() - 0.25).abs() < 1e-9);
}

#[test]
fn test_from_plan() {
    let plan = build_plan(HiitGoal::FatBurn, 20.0, None).unwrap();
    let seq = IntervalSequencer::from_plan(&plan).unwrap();

    assert_eq!(seq.total_rounds(), 1);
    assert_eq!(seq.intervals().len(), plan.intervals().len());
    assert_eq!(seq.current_interval().kind, IntervalKind::Warmup);
    assert_eq!(seq.current_interval().name, "Warmup");
    assert_eq!(seq.remaining_seconds(), 300);
    assert_eq!(seq.total_duration_seconds(), 1170);
    assert_eq!(seq.next_interval().map(|i| i.kind), Some(IntervalKind::Work));
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        IntervalSequencer::new(Vec::new(), 2),
        Err(WorkoutError::InvalidWorkout(_))
    ));
    assert!(matches!(
        strength_routine().with_rounds(0).sequencer(),
        Err(WorkoutError::InvalidWorkout(_))
    ));
    assert!(matches!(
        IntervalSequencer::new(
            vec![
                TimedInterval::new("Work", IntervalKind::Work, 20),
                TimedInterval::new("Rest", IntervalKind::Rest, 0),
            ],
            1
        ),
        Err(WorkoutError::InvalidWorkout(_))
    ));
}

#[test]
fn test_cue_mapping() {
    assert_eq!(
        cue_for(&SequencerEvent::Countdown { seconds: 3 }),
        Some(CuePattern::CountdownTick)
    );
    assert_eq!(
        cue_for(&SequencerEvent::IntervalStarted { index: 2, round: 1 }),
        Some(CuePattern::Transition)
    );
    assert_eq!(
        cue_for(&SequencerEvent::Completed),
        Some(CuePattern::Transition)
    );
    assert_eq!(cue_for(&SequencerEvent::RoundStarted { round: 2 }), None);

    let events = [
        SequencerEvent::RoundStarted { round: 2 },
        SequencerEvent::IntervalStarted { index: 0, round: 2 },
        SequencerEvent::Countdown { seconds: 3 },
        SequencerEvent::Countdown { seconds: 2 },
    ];
    assert_eq!(
        cues_for(&events),
        vec![CuePattern::Transition, CuePattern::CountdownTick]
    );
}

#[test]
fn test_cue_player_respects_settings() {
    let events = [SequencerEvent::Completed];

    let muted = CuePlayer::new(&AudioConfig {
        enabled: false,
        volume: 80,
    });
    assert!(muted.handle(&events).is_empty());

    // Zero volume still reports the cue but plays nothing
    let mut player = CuePlayer::new(&AudioConfig {
        enabled: true,
        volume: 0,
    });
    assert_eq!(player.handle(&events), vec![CuePattern::Transition]);

    player.set_enabled(false);
    assert!(player.handle(&events).is_empty());
}
