//! Mapping from timer events to audible cues.

use super::tones::{CuePattern, ToneGenerator};
use super::AudioConfig;
use crate::workouts::SequencerEvent;

/// Cue for a single sequencer event, if it has one.
pub fn cue_for(event: &SequencerEvent) -> Option<CuePattern> {
    match event {
        SequencerEvent::Countdown { .. } => Some(CuePattern::CountdownTick),
        SequencerEvent::IntervalStarted { .. } | SequencerEvent::Completed => {
            Some(CuePattern::Transition)
        }
        // Always accompanied by IntervalStarted
        SequencerEvent::RoundStarted { .. } => None,
    }
}

/// Cues for one update's worth of events, at most one per pattern.
pub fn cues_for(events: &[SequencerEvent]) -> Vec<CuePattern> {
    let mut cues: Vec<CuePattern> = Vec::new();
    for cue in events.iter().filter_map(cue_for) {
        if !cues.contains(&cue) {
            cues.push(cue);
        }
    }
    cues
}

/// Plays timer cues according to the audio settings.
#[derive(Debug, Clone)]
pub struct CuePlayer {
    generator: ToneGenerator,
    enabled: bool,
}

impl CuePlayer {
    pub fn new(config: &AudioConfig) -> Self {
        let mut player = Self {
            generator: ToneGenerator::new(),
            enabled: true,
        };
        player.apply_config(config);
        player
    }

    /// Pick up changed settings.
    pub fn apply_config(&mut self, config: &AudioConfig) {
        self.enabled = config.enabled;
        self.generator.set_volume(config.volume_fraction());
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle cues for the current session without touching saved settings.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Play the cues for a batch of events. Returns what was played.
    pub fn handle(&self, events: &[SequencerEvent]) -> Vec<CuePattern> {
        if !self.enabled {
            return Vec::new();
        }

        let cues = cues_for(events);
        for cue in &cues {
            self.generator.play_pattern(*cue);
        }
        cues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            cue_for(&SequencerEvent::Countdown { seconds: 3 }),
            Some(CuePattern::CountdownTick)
        );
        assert_eq!(
            cue_for(&SequencerEvent::IntervalStarted { index: 1, round: 1 }),
            Some(CuePattern::Transition)
        );
        assert_eq!(cue_for(&SequencerEvent::RoundStarted { round: 2 }), None);
        assert_eq!(
            cue_for(&SequencerEvent::Completed),
            Some(CuePattern::Transition)
        );
    }

    #[test]
    fn test_round_change_plays_one_transition() {
        let events = [
            SequencerEvent::RoundStarted { round: 2 },
            SequencerEvent::IntervalStarted { index: 0, round: 2 },
        ];
        assert_eq!(cues_for(&events), vec![CuePattern::Transition]);
    }

    #[test]
    fn test_disabled_player_is_silent() {
        let config = AudioConfig {
            enabled: false,
            ..AudioConfig::default()
        };
        let player = CuePlayer::new(&config);
        assert!(player
            .handle(&[SequencerEvent::Countdown { seconds: 1 }])
            .is_empty());
    }
}
