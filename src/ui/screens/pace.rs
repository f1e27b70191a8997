//! Two-way pace converter between min/mile and min/km.

use egui::{RichText, Ui};

use crate::formulas::{Pace, PaceDirection};
use crate::ui::widgets::TimeInput;

/// Pace converter state. Editing either side rewrites the other.
pub struct PaceScreen {
    per_mile: TimeInput,
    per_km: TimeInput,
}

impl Default for PaceScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PaceScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            per_mile: TimeInput::ms(8, 0),
            per_km: TimeInput::ms(0, 0),
        };
        screen.convert(PaceDirection::MileToKm);
        screen
    }

    /// Convert from the edited side into the other one.
    pub fn convert(&mut self, direction: PaceDirection) {
        let (source, target) = match direction {
            PaceDirection::MileToKm => (&self.per_mile, &mut self.per_km),
            PaceDirection::KmToMile => (&self.per_km, &mut self.per_mile),
        };

        let pace = direction.convert(source.minutes_value(), source.seconds_value());
        write_pace(target, pace);
        tracing::debug!("Pace {} -> {} {}", direction.input_unit(), pace, direction.output_unit());
    }

    /// Current min/mile pace.
    pub fn per_mile(&self) -> Pace {
        read_pace(&self.per_mile)
    }

    /// Current min/km pace.
    pub fn per_km(&self) -> Pace {
        read_pace(&self.per_km)
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui) {
        for direction in [PaceDirection::MileToKm, PaceDirection::KmToMile] {
            let input = match direction {
                PaceDirection::MileToKm => &mut self.per_mile,
                PaceDirection::KmToMile => &mut self.per_km,
            };

            let changed = ui
                .group(|ui| {
                    ui.set_min_width(ui.available_width() - 16.0);
                    ui.label(
                        RichText::new(format!("Pace ({})", direction.input_unit()))
                            .size(18.0)
                            .strong(),
                    );
                    input.show(ui).changed()
                })
                .inner;

            if changed {
                self.convert(direction);
            }

            ui.add_space(8.0);
        }

        ui.label(
            RichText::new("1 mile = 1.609344 km. Seconds of 60 or more carry into minutes.")
                .small()
                .weak(),
        );
    }
}

fn write_pace(target: &mut TimeInput, pace: Pace) {
    target.minutes = pace.minutes.to_string();
    target.seconds = format!("{:02}", pace.seconds);
}

fn read_pace(input: &TimeInput) -> Pace {
    Pace::from_total_minutes(input.minutes_value() + input.seconds_value() / 60.0)
}
