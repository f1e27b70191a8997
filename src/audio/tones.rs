//! Tone patterns for timer cues and their playback.
//!
//! Playback goes through rodio when the `audio` feature is enabled. Without
//! it the generator accepts the same calls and only logs them.

use std::time::Duration;

use super::AudioError;

/// Tone frequencies in Hz.
pub mod frequencies {
    /// Short high beep for the last seconds of an interval
    pub const COUNTDOWN: f32 = 800.0;
    /// Lower tone when one interval hands over to the next
    pub const TRANSITION: f32 = 400.0;
}

/// Tone durations in milliseconds.
pub mod durations {
    pub const COUNTDOWN: u64 = 100;
    pub const TRANSITION: u64 = 300;
}

/// Predefined cue patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuePattern {
    /// Countdown beep at 3, 2 and 1 seconds
    CountdownTick,
    /// Interval change or session end
    Transition,
}

impl CuePattern {
    /// Get the tone sequence for this pattern.
    pub fn tones(&self) -> Vec<Tone> {
        match self {
            CuePattern::CountdownTick => {
                vec![Tone::new(frequencies::COUNTDOWN, durations::COUNTDOWN)]
            }
            CuePattern::Transition => {
                vec![Tone::new(frequencies::TRANSITION, durations::TRANSITION)]
            }
        }
    }

    /// Get total duration of the pattern in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.tones().iter().map(|t| t.duration_ms).sum()
    }
}

/// A single tone with frequency and duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency_hz: f32,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl Tone {
    pub fn new(frequency_hz: f32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Plays cue patterns off the UI thread.
#[derive(Debug, Clone)]
pub struct ToneGenerator {
    /// Volume level (0.0 - 1.0)
    volume: f32,
}

impl Default for ToneGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneGenerator {
    pub fn new() -> Self {
        Self {
            volume: 0.8,
        }
    }

    /// Set the volume level (0.0 - 1.0).
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Play a pattern on a background thread and return immediately.
    ///
    /// Device errors surface in the log, not to the caller.
    pub fn play_pattern(&self, pattern: CuePattern) {
        if self.volume <= 0.0 {
            return;
        }

        let tones = pattern.tones();
        let volume = self.volume;
        let spawned = std::thread::Builder::new()
            .name("cue-playback".to_string())
            .spawn(move || {
                if let Err(e) = play_blocking(&tones, volume) {
                    tracing::warn!("Cue playback failed: {}", e);
                }
            });

        if let Err(e) = spawned {
            tracing::warn!("Could not start cue playback thread: {}", e);
        }
    }
}

#[cfg(feature = "audio")]
fn play_blocking(tones: &[Tone], volume: f32) -> Result<(), AudioError> {
    use rodio::source::SineWave;
    use rodio::{OutputStream, Sink, Source};

    // The stream has to live on the thread that plays it
    let (_stream, stream_handle) =
        OutputStream::try_default().map_err(|e| AudioError::DeviceNotAvailable(e.to_string()))?;
    let sink =
        Sink::try_new(&stream_handle).map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;

    for tone in tones {
        let source = SineWave::new(tone.frequency_hz)
            .take_duration(tone.duration())
            .amplify(volume * 0.3);
        sink.append(source);
        sink.sleep_until_end();
    }

    Ok(())
}

#[cfg(not(feature = "audio"))]
fn play_blocking(tones: &[Tone], volume: f32) -> Result<(), AudioError> {
    for tone in tones {
        tracing::debug!(
            "Cue tone {} Hz for {} ms at volume {:.2} (audio feature disabled)",
            tone.frequency_hz,
            tone.duration_ms,
            volume
        );
    }
    Ok(())
}
