//! Karvonen heart rate zone screen.

use egui::{RichText, Ui};

use crate::formulas::error::ensure_positive;
use crate::formulas::{resolve_max_hr, FormulaResult, KarvonenZones, MaxHrSource};
use crate::storage::CalculatorDefaults;
use crate::ui::theme::zone_colors::hr_zone_color;
use crate::ui::widgets::{MetricDisplay, ZoneIndicator};

const DEFAULT_AGE: u32 = 30;
const DEFAULT_RESTING_HR: u32 = 60;
const DEFAULT_CUSTOM_MAX_HR: u32 = 190;

/// Zones with the max heart rate they were calculated from.
#[derive(Debug, Clone, PartialEq)]
pub struct KarvonenResult {
    pub zones: KarvonenZones,
    pub source: MaxHrSource,
}

/// Karvonen calculator state.
pub struct KarvonenScreen {
    age_input: String,
    resting_hr_input: String,
    use_custom_max: bool,
    custom_max_input: String,
    check_hr_input: String,
    result: Option<KarvonenResult>,
}

impl KarvonenScreen {
    pub fn new(defaults: &CalculatorDefaults) -> Self {
        let mut screen = Self {
            age_input: defaults.age.unwrap_or(DEFAULT_AGE).to_string(),
            resting_hr_input: defaults
                .resting_hr
                .unwrap_or(DEFAULT_RESTING_HR)
                .to_string(),
            use_custom_max: false,
            custom_max_input: DEFAULT_CUSTOM_MAX_HR.to_string(),
            check_hr_input: String::new(),
            result: None,
        };
        screen.recalculate();
        screen
    }

    fn calculate(&self) -> FormulaResult<KarvonenResult> {
        let age = parse_number(&self.age_input);
        let resting = parse_number(&self.resting_hr_input);
        let custom = self
            .use_custom_max
            .then(|| parse_number(&self.custom_max_input));

        let (max_hr, source) = resolve_max_hr(age, custom)?;
        let resting = ensure_positive("resting heart rate", resting)?;
        let zones = KarvonenZones::calculate(max_hr, resting)?;
        Ok(KarvonenResult { zones, source })
    }

    /// Re-run the formula on the current inputs.
    pub fn recalculate(&mut self) {
        self.result = match self.calculate() {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::debug!("Karvonen inputs rejected: {}", e);
                None
            }
        };
    }

    /// Latest result, `None` while the inputs are invalid.
    pub fn result(&self) -> Option<&KarvonenResult> {
        self.result.as_ref()
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui) {
        let mut changed = false;

        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);

            egui::Grid::new("karvonen_inputs")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label("What is your current age?");
                    changed |= ui
                        .add(egui::TextEdit::singleline(&mut self.age_input).desired_width(60.0))
                        .changed();
                    ui.end_row();

                    ui.label("What is your resting heart rate?");
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut self.resting_hr_input)
                                .desired_width(60.0),
                        )
                        .changed();
                    ui.end_row();

                    changed |= ui
                        .checkbox(&mut self.use_custom_max, "I know my max heart rate")
                        .changed();
                    ui.add_enabled_ui(self.use_custom_max, |ui| {
                        changed |= ui
                            .add(
                                egui::TextEdit::singleline(&mut self.custom_max_input)
                                    .desired_width(60.0),
                            )
                            .changed();
                    });
                    ui.end_row();
                });
        });

        if changed {
            self.recalculate();
        }

        ui.add_space(16.0);

        let Some(result) = &self.result else {
            ui.label(
                RichText::new("Enter your age and resting heart rate to see your zones.").weak(),
            );
            return;
        };

        ui.label(RichText::new("Your Heart Rate Zones").size(18.0).strong());
        ui.horizontal(|ui| {
            MetricDisplay::heart_rate(result.zones.max_hr, "Max HR").show(ui);
            MetricDisplay::heart_rate(result.zones.reserve(), "Heart Rate Reserve").show(ui);
            ui.label(RichText::new(result.source.to_string()).weak());
        });
        ui.add_space(8.0);

        egui::Grid::new("karvonen_zones")
            .num_columns(3)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for zone in result.zones.all_zones() {
                    ZoneIndicator::zone_badge(ui, &zone.name, Some(zone.zone));
                    ui.label(format!(
                        "{} ({:.0}-{:.0}%)",
                        zone.label,
                        zone.min_intensity * 100.0,
                        zone.max_intensity * 100.0
                    ));
                    ui.label(
                        RichText::new(format!("{}-{} bpm", zone.min_bpm, zone.max_bpm))
                            .color(hr_zone_color(zone.zone))
                            .strong(),
                    );
                    ui.end_row();
                }
            });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            ui.label("Check a heart rate:");
            ui.add(egui::TextEdit::singleline(&mut self.check_hr_input).desired_width(60.0));
            ui.label("bpm");
        });

        let current_zone = self
            .check_hr_input
            .trim()
            .parse::<i32>()
            .ok()
            .map(|hr| result.zones.zone_for(hr))
            .filter(|zone| *zone > 0);
        ZoneIndicator::hr_zone(ui, current_zone, Some(&result.zones));

        ui.add_space(8.0);
        ui.label(
            RichText::new("Target HR = ((Max HR - Resting HR) x %Intensity) + Resting HR")
                .small()
                .weak(),
        );
    }
}

/// Parse a form field; anything unparsable becomes NaN and fails validation.
fn parse_number(input: &str) -> f64 {
    input.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_estimate_zones() {
        let screen = KarvonenScreen::new(&CalculatorDefaults::default());
        let result = screen.result().unwrap();

        assert_eq!(result.source, MaxHrSource::AgeEstimate);
        assert_eq!(result.zones.max_hr, 190.0);
        assert_eq!(result.zones.reserve(), 130.0);
        assert_eq!(result.zones.z1_recovery.min_bpm, 125);
        assert_eq!(result.zones.z1_recovery.max_bpm, 138);
    }

    #[test]
    fn test_custom_max_wins() {
        let mut screen = KarvonenScreen::new(&CalculatorDefaults::default());
        screen.use_custom_max = true;
        screen.custom_max_input = "200".to_string();
        screen.recalculate();

        let result = screen.result().unwrap();
        assert_eq!(result.source, MaxHrSource::Custom);
        assert_eq!(result.zones.max_hr, 200.0);
    }

    #[test]
    fn test_missing_resting_hr_clears_result() {
        let mut screen = KarvonenScreen::new(&CalculatorDefaults::default());
        screen.resting_hr_input.clear();
        screen.recalculate();
        assert!(screen.result().is_none());
    }
}
