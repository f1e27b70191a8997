//! Interval timer screen for the strength routine and generated HIIT plans.

use egui::{Align, Layout, ProgressBar, RichText, Ui};

use crate::audio::{AudioConfig, CuePlayer};
use crate::formulas::format_race_time;
use crate::ui::theme::zone_colors::interval_color;
use crate::workouts::{
    Clock, IntervalSequencer, IntervalTimer, MonotonicClock, Routine, SequencerEvent,
    TimerStatus, WorkoutError, WorkoutPlan,
};

/// Timer screen state.
pub struct ExerciseTimerScreen<C: Clock = MonotonicClock> {
    title: String,
    frequency: Option<String>,
    tips: Vec<String>,
    timer: IntervalTimer<C>,
    cues: CuePlayer,
}

impl ExerciseTimerScreen<MonotonicClock> {
    /// Timer for a fixed routine.
    pub fn for_routine(routine: &Routine, audio: &AudioConfig) -> Result<Self, WorkoutError> {
        let mut screen = Self::with_clock(
            routine.title.clone(),
            routine.sequencer()?,
            MonotonicClock::new(),
            audio,
        );
        screen.frequency = Some(routine.frequency.clone()).filter(|f| !f.is_empty());
        screen.tips = routine.tips.clone();
        Ok(screen)
    }

    /// Timer for a generated HIIT plan.
    pub fn for_plan(plan: &WorkoutPlan, audio: &AudioConfig) -> Result<Self, WorkoutError> {
        let mut screen = Self::with_clock(
            plan.name().to_string(),
            IntervalSequencer::from_plan(plan)?,
            MonotonicClock::new(),
            audio,
        );
        screen.tips = plan.recommendations().to_vec();
        Ok(screen)
    }
}

impl<C: Clock> ExerciseTimerScreen<C> {
    pub fn with_clock(
        title: String,
        sequencer: IntervalSequencer,
        clock: C,
        audio: &AudioConfig,
    ) -> Self {
        Self {
            title,
            frequency: None,
            tips: Vec::new(),
            timer: IntervalTimer::new(sequencer, clock),
            cues: CuePlayer::new(audio),
        }
    }

    /// Apply changed audio settings.
    pub fn apply_audio_config(&mut self, audio: &AudioConfig) {
        self.cues.apply_config(audio);
    }

    pub fn timer(&self) -> &IntervalTimer<C> {
        &self.timer
    }

    /// Advance the timer to the clock and play cues for what happened.
    pub fn poll(&mut self) -> Vec<SequencerEvent> {
        let events = self.timer.update();
        self.play(&events);
        events
    }

    fn play(&self, events: &[SequencerEvent]) {
        if !events.is_empty() {
            self.cues.handle(events);
        }
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui) {
        self.poll();

        if let Some(wait) = self.timer.until_next_tick() {
            ui.ctx().request_repaint_after(wait);
        }

        let sequencer = self.timer.sequencer();
        let current = sequencer.current_interval();
        let status = sequencer.status();

        ui.label(RichText::new(&self.title).size(22.0).strong());
        if let Some(frequency) = &self.frequency {
            ui.label(RichText::new(format!("Recommended: {}", frequency)).weak());
        }
        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            let heading = if status == TimerStatus::Complete {
                RichText::new("Workout Complete!").size(28.0).strong()
            } else {
                RichText::new(&current.name)
                    .size(28.0)
                    .strong()
                    .color(interval_color(current.kind))
            };
            ui.label(heading);

            ui.label(
                RichText::new(format_race_time(f64::from(sequencer.remaining_seconds())))
                    .size(72.0)
                    .monospace(),
            );

            ui.label(format!(
                "Round {} of {}",
                sequencer.round(),
                sequencer.total_rounds()
            ));

            ui.add_space(8.0);
            ui.add(
                ProgressBar::new(sequencer.progress() as f32)
                    .desired_width(ui.available_width() * 0.8)
                    .show_percentage(),
            );

            if status != TimerStatus::Complete {
                let next = match sequencer.next_interval() {
                    Some(next) => format!("Up next: {} ({}s)", next.name, next.duration_seconds),
                    None if sequencer.round() < sequencer.total_rounds() => {
                        "Up next: next round".to_string()
                    }
                    None => "Last interval".to_string(),
                };
                ui.label(RichText::new(next).weak());
            }

            ui.label(
                RichText::new(format!(
                    "Total session: {}",
                    format_race_time(f64::from(sequencer.total_duration_seconds()))
                ))
                .small()
                .weak(),
            );
        });

        ui.add_space(16.0);
        self.render_controls(ui);

        if !self.tips.is_empty() {
            ui.add_space(16.0);
            ui.collapsing("Tips", |ui| {
                for tip in &self.tips {
                    ui.label(format!("• {}", tip));
                }
            });
        }
    }

    fn render_controls(&mut self, ui: &mut Ui) {
        let status = self.timer.sequencer().status();

        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            match status {
                TimerStatus::Running => {
                    if ui.button("Pause").clicked() {
                        self.timer.pause();
                    }
                }
                TimerStatus::Idle | TimerStatus::Paused => {
                    if ui.button(start_label(status)).clicked() {
                        self.timer.start();
                    }
                }
                TimerStatus::Complete => {}
            }

            if ui
                .add_enabled(status != TimerStatus::Complete, egui::Button::new("Skip"))
                .clicked()
            {
                let events = self.timer.skip_interval();
                self.play(&events);
            }

            if ui.button("Reset").clicked() {
                self.timer.reset();
            }

            ui.separator();

            let mut enabled = self.cues.is_enabled();
            if ui.checkbox(&mut enabled, "Audio cues").changed() {
                self.cues.set_enabled(enabled);
            }
        });
    }
}

/// Label for the button that starts a stopped timer.
fn start_label(status: TimerStatus) -> &'static str {
    match status {
        TimerStatus::Paused => "Resume",
        _ => "Start",
    }
}
