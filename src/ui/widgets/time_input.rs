//! Time entry fields (hours, minutes, seconds) for the calculator forms.

use egui::{Response, Ui};

use crate::formulas::{hms_to_seconds, ms_to_seconds};

/// Text buffers behind an `H:MM:SS` or `M:SS` entry.
///
/// Fields are kept as strings so partially typed values survive between
/// frames; blanks count as zero when converted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeInput {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    show_hours: bool,
}

impl TimeInput {
    /// An `H:MM:SS` entry.
    pub fn hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: hours.to_string(),
            minutes: minutes.to_string(),
            seconds: seconds.to_string(),
            show_hours: true,
        }
    }

    /// An `M:SS` entry.
    pub fn ms(minutes: u32, seconds: u32) -> Self {
        Self {
            hours: String::new(),
            minutes: minutes.to_string(),
            seconds: seconds.to_string(),
            show_hours: false,
        }
    }

    /// Total seconds entered.
    pub fn total_seconds(&self) -> u32 {
        if self.show_hours {
            hms_to_seconds(&self.hours, &self.minutes, &self.seconds)
        } else {
            ms_to_seconds(&self.minutes, &self.seconds)
        }
    }

    /// Minutes field as a number (0 when blank).
    pub fn minutes_value(&self) -> f64 {
        self.minutes.trim().parse().unwrap_or(0.0)
    }

    /// Seconds field as a number (0 when blank).
    pub fn seconds_value(&self) -> f64 {
        self.seconds.trim().parse().unwrap_or(0.0)
    }

    /// Render the fields on one row. The response reports `changed()` when
    /// any field was edited this frame.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        ui.horizontal(|ui| {
            let mut response: Option<Response> = None;

            if self.show_hours {
                let r = ui.add(egui::TextEdit::singleline(&mut self.hours).desired_width(36.0));
                ui.label("h");
                response = Some(r);
            }

            let r = ui.add(egui::TextEdit::singleline(&mut self.minutes).desired_width(36.0));
            ui.label("m");
            response = Some(match response {
                Some(prev) => prev.union(r),
                None => r,
            });

            let r = ui.add(egui::TextEdit::singleline(&mut self.seconds).desired_width(36.0));
            ui.label("s");

            match response {
                Some(prev) => prev.union(r),
                None => r,
            }
        })
        .inner
    }
}
