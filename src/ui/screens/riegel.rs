//! Riegel race time predictor screen.

use egui::{RichText, Ui};

use crate::formulas::{pace_per_unit, riegel_time, FormulaResult, RaceDistance, KM_PER_MILE};
use crate::storage::Units;
use crate::ui::widgets::{MetricDisplay, MetricSize, TimeInput};

/// Predicted time and pace for the target distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiegelResult {
    pub time_seconds: f64,
    pub pace_seconds: f64,
}

/// Riegel calculator state.
pub struct RiegelScreen {
    units: Units,
    known_distance_input: String,
    known_time: TimeInput,
    target_distance_input: String,
    result: Option<RiegelResult>,
}

impl RiegelScreen {
    pub fn new(units: Units) -> Self {
        let mut screen = Self {
            units,
            known_distance_input: format_distance(preset_value(RaceDistance::TenK, units)),
            known_time: TimeInput::hms(0, 45, 0),
            target_distance_input: format_distance(preset_value(
                RaceDistance::HalfMarathon,
                units,
            )),
            result: None,
        };
        screen.recalculate();
        screen
    }

    fn calculate(&self) -> FormulaResult<RiegelResult> {
        let d1 = parse_distance(&self.known_distance_input);
        let t1 = f64::from(self.known_time.total_seconds());
        let d2 = parse_distance(&self.target_distance_input);

        let time_seconds = riegel_time(d1, t1, d2)?;
        Ok(RiegelResult {
            time_seconds,
            pace_seconds: pace_per_unit(time_seconds, d2)?,
        })
    }

    /// Re-run the formula on the current inputs.
    pub fn recalculate(&mut self) {
        self.result = self.calculate().ok();
        tracing::debug!("Riegel prediction: {:?}", self.result);
    }

    /// Latest result, `None` while the inputs are invalid.
    pub fn result(&self) -> Option<&RiegelResult> {
        self.result.as_ref()
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui) {
        let units = self.units;
        let mut changed = false;

        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);
            ui.label(RichText::new("Known Performance").size(18.0).strong());
            ui.add_space(8.0);

            changed |= distance_row(ui, &mut self.known_distance_input, units, "known");

            ui.horizontal(|ui| {
                ui.label("Time:");
                changed |= self.known_time.show(ui).changed();
            });
        });

        ui.add_space(8.0);

        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);
            ui.label(RichText::new("Target Performance").size(18.0).strong());
            ui.add_space(8.0);

            changed |= distance_row(ui, &mut self.target_distance_input, units, "target");
        });

        if changed {
            self.recalculate();
        }

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            MetricDisplay::race_time(self.result.map(|r| r.time_seconds), "Predicted Time")
                .with_size(MetricSize::Large)
                .show(ui);
            MetricDisplay::pace(
                self.result.map(|r| r.pace_seconds),
                units.pace_label(),
                "Average Pace",
            )
            .show(ui);
        });

        ui.add_space(8.0);
        ui.collapsing("Riegel's Formula", |ui| {
            ui.label("T2 = T1 x (D2 / D1)^1.06");
            ui.label(
                RichText::new(
                    "Most accurate between about 3.5 minutes and 4 hours of racing. \
                     Predictions assume equivalent training for the longer distance.",
                )
                .weak(),
            );
        });
    }
}

/// Distance field plus race presets. Returns whether the value changed.
pub(super) fn distance_row(ui: &mut Ui, input: &mut String, units: Units, id: &str) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(format!("Distance ({}):", units.distance_label()));
        changed |= ui
            .add(egui::TextEdit::singleline(input).desired_width(80.0).id_salt(id))
            .changed();

        for preset in RaceDistance::PRESETS {
            if ui.small_button(preset.short_label()).clicked() {
                *input = format_distance(preset_value(preset, units));
                changed = true;
            }
        }
    });

    changed
}

/// A preset distance in the configured unit.
pub(super) fn preset_value(distance: RaceDistance, units: Units) -> f64 {
    match units {
        Units::Metric => distance.km(),
        Units::Imperial => distance.km() / KM_PER_MILE,
    }
}

/// Distance with up to four decimals and no trailing zeros.
pub(super) fn format_distance(value: f64) -> String {
    let text = format!("{:.4}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub(super) fn parse_distance(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}
