//! VDOT screen: score, training paces and equivalent race times.

use egui::{RichText, Ui};

use crate::formulas::{format_pace, format_race_time, RaceDistance, VdotReport, KM_PER_MILE};
use crate::storage::Units;
use crate::ui::widgets::{MetricDisplay, MetricSize, TimeInput};

use super::riegel::{distance_row, format_distance, parse_distance, preset_value};

/// VDOT calculator state.
pub struct VdotScreen {
    units: Units,
    distance_input: String,
    time: TimeInput,
    report: Option<VdotReport>,
}

impl VdotScreen {
    pub fn new(units: Units) -> Self {
        let mut screen = Self {
            units,
            distance_input: format_distance(preset_value(RaceDistance::FiveK, units)),
            time: TimeInput::hms(0, 20, 0),
            report: None,
        };
        screen.recalculate();
        screen
    }

    /// Re-run the calculation on the current inputs.
    pub fn recalculate(&mut self) {
        let seconds = f64::from(self.time.total_seconds());
        let meters = self.distance_meters();
        self.report = match VdotReport::from_performance(meters, seconds) {
            Ok(report) => {
                tracing::debug!("VDOT {:.1} from {:.0} m in {}s", report.vdot, meters, seconds);
                Some(report)
            }
            Err(e) => {
                tracing::debug!("VDOT inputs rejected: {}", e);
                None
            }
        };
    }

    /// Latest report, `None` while the inputs are invalid.
    pub fn report(&self) -> Option<&VdotReport> {
        self.report.as_ref()
    }

    /// Entered distance converted to metres, NaN when unparseable.
    fn distance_meters(&self) -> f64 {
        let value = parse_distance(&self.distance_input);
        match self.units {
            Units::Metric => value * 1000.0,
            Units::Imperial => value * KM_PER_MILE * 1000.0,
        }
    }

    /// Pace per km expressed in the configured unit.
    fn display_pace(&self, seconds_per_km: f64) -> String {
        match self.units {
            Units::Metric => format_pace(seconds_per_km),
            Units::Imperial => format_pace(seconds_per_km * KM_PER_MILE),
        }
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui) {
        let units = self.units;
        let mut changed = false;

        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);
            ui.label(RichText::new("Race Result").size(18.0).strong());
            ui.add_space(8.0);

            changed |= distance_row(ui, &mut self.distance_input, units, "vdot_distance");

            ui.horizontal(|ui| {
                ui.label("Time:");
                changed |= self.time.show(ui).changed();
            });
        });

        if changed {
            self.recalculate();
        }

        ui.add_space(16.0);

        ui.vertical_centered(|ui| {
            MetricDisplay::vdot(self.report.as_ref().map(|r| r.vdot))
                .with_size(MetricSize::Large)
                .show(ui);
        });

        let Some(report) = &self.report else {
            ui.label(RichText::new("Enter a race time to see your training paces.").weak());
            return;
        };

        ui.add_space(8.0);
        ui.label(RichText::new("Training Paces").size(18.0).strong());

        egui::Grid::new("vdot_training_paces")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for pace in &report.paces {
                    ui.label(RichText::new(&pace.name).strong());
                    ui.label(RichText::new(&pace.description).weak());
                    ui.label(format!(
                        "{} {}",
                        self.display_pace(pace.pace_seconds_per_km),
                        self.units.pace_label()
                    ));
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        ui.label(RichText::new("Race Predictions").size(18.0).strong());

        egui::Grid::new("vdot_race_predictions")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for prediction in &report.predictions {
                    ui.label(prediction.distance.to_string());
                    ui.label(RichText::new(format_race_time(prediction.time_seconds)).strong());
                    ui.label(format!(
                        "{} {}",
                        self.display_pace(prediction.pace_seconds_per_km),
                        self.units.pace_label()
                    ));
                    ui.end_row();
                }
            });
    }
}
