//! Maffetone 180 formula screen.

use egui::{RichText, Ui};

use crate::formulas::{maffetone_range_for, MaffetoneRange, TrainingStatus};
use crate::storage::CalculatorDefaults;
use crate::ui::widgets::{MetricDisplay, MetricSize};

const DEFAULT_AGE: u32 = 39;

/// Maffetone calculator state.
pub struct MaffetoneScreen {
    age_input: String,
    status: TrainingStatus,
    range: Option<MaffetoneRange>,
}

impl MaffetoneScreen {
    pub fn new(defaults: &CalculatorDefaults) -> Self {
        let mut screen = Self {
            age_input: defaults.age.unwrap_or(DEFAULT_AGE).to_string(),
            status: defaults.training_status,
            range: None,
        };
        screen.recalculate();
        screen
    }

    /// Re-run the formula on the current inputs.
    pub fn recalculate(&mut self) {
        let age = self.age_input.trim().parse::<f64>().unwrap_or(0.0);
        self.range = maffetone_range_for(age, self.status).ok();
        tracing::debug!("Maffetone age={} status={:?} -> {:?}", age, self.status, self.range);
    }

    /// Latest result, `None` while the inputs are invalid.
    pub fn range(&self) -> Option<&MaffetoneRange> {
        self.range.as_ref()
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui) {
        ui.label(
            RichText::new("Find your aerobic heart-rate training zone.")
                .size(16.0)
                .weak(),
        );
        ui.add_space(12.0);

        let mut changed = false;

        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);

            ui.horizontal(|ui| {
                ui.label("What is your current age?");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut self.age_input).desired_width(60.0))
                    .changed();
                ui.label("years");
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new("Which statement best describes your training status?").strong(),
            );

            for status in TrainingStatus::ALL {
                changed |= ui
                    .radio_value(&mut self.status, status, status.label())
                    .changed();
            }
        });

        if changed {
            self.recalculate();
        }

        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            MetricDisplay::heart_rate_range(self.range.as_ref(), "Your target range")
                .with_size(MetricSize::Large)
                .show(ui);

            match &self.range {
                Some(range) => {
                    ui.label(format!("Maximum aerobic heart rate: {:.0} bpm", range.base));
                    ui.label(RichText::new(format!("Adjustment: {}", self.status.label())).weak());
                }
                None => {
                    ui.label(RichText::new("Enter a valid age to see your range.").weak());
                }
            }
        });

        ui.add_space(16.0);
        ui.collapsing("How to use it", |ui| {
            ui.label("Warm up and keep your heart rate between the low and high numbers.");
            ui.label("Stay at or below the maximum value for most aerobic workouts.");
            ui.label("Reassess every few months as fitness and health improve.");
        });
    }
}
