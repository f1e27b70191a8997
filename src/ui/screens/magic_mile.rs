//! Magic Mile race prediction screen.

use egui::{RichText, Ui};

use crate::formulas::{format_pace, format_race_time, magic_mile_predictions, MagicMilePrediction};
use crate::ui::widgets::TimeInput;

/// Magic Mile calculator state.
pub struct MagicMileScreen {
    mile_time: TimeInput,
    predictions: Vec<MagicMilePrediction>,
}

impl Default for MagicMileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MagicMileScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            mile_time: TimeInput::ms(7, 0),
            predictions: Vec::new(),
        };
        screen.recalculate();
        screen
    }

    /// Re-run the predictions on the current mile time.
    pub fn recalculate(&mut self) {
        let seconds = f64::from(self.mile_time.total_seconds());
        self.predictions = magic_mile_predictions(seconds).unwrap_or_else(|e| {
            tracing::debug!("Magic Mile input rejected: {}", e);
            Vec::new()
        });
    }

    /// Latest predictions, empty while the input is invalid.
    pub fn predictions(&self) -> &[MagicMilePrediction] {
        &self.predictions
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui) {
        ui.label(
            RichText::new("Run one mile as fast as you can after a warmup, then enter your time.")
                .weak(),
        );
        ui.add_space(8.0);

        let changed = ui
            .horizontal(|ui| {
                ui.label("Magic Mile time:");
                self.mile_time.show(ui).changed()
            })
            .inner;

        if changed {
            self.recalculate();
        }

        ui.add_space(16.0);

        if self.predictions.is_empty() {
            ui.label(RichText::new("Enter a valid mile time to see predictions.").weak());
            return;
        }

        egui::Grid::new("magic_mile_predictions")
            .num_columns(4)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Race").strong());
                ui.label(RichText::new("Pace / mile").strong());
                ui.label(RichText::new("Pace / km").strong());
                ui.label(RichText::new("Finish").strong());
                ui.end_row();

                for prediction in &self.predictions {
                    ui.label(&prediction.label);
                    ui.label(format_pace(prediction.pace_per_mile));
                    ui.label(format_pace(prediction.pace_per_km));
                    ui.label(RichText::new(format_race_time(prediction.total_time)).strong());
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Jeff Galloway's Magic Mile: race pace is the mile time plus a fixed \
                 offset (5K) or scaled by a distance factor.",
            )
            .small()
            .weak(),
        );
    }
}
