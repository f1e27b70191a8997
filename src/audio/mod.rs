//! Audio cues for the interval timer.
//!
//! Countdown beeps in the last three seconds of an interval and a longer
//! tone on every interval change.

pub mod cues;
pub mod tones;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cues::{cue_for, cues_for, CuePlayer};
pub use tones::{CuePattern, Tone, ToneGenerator};

/// Errors that can occur during audio operations
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),

    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}

/// Audio configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master enable for timer cues
    pub enabled: bool,
    /// Master volume (0-100)
    pub volume: u8,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 80,
        }
    }
}

impl AudioConfig {
    /// Volume as a 0.0-1.0 gain.
    pub fn volume_fraction(&self) -> f32 {
        f32::from(self.volume.min(100)) / 100.0
    }
}
