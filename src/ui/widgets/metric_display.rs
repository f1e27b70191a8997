//! Large readable result numbers for the calculator screens.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use crate::formulas::{
    format_pace, format_race_time, MaffetoneRange, PACE_PLACEHOLDER, TIME_PLACEHOLDER,
};

/// A widget for displaying a single calculated figure.
pub struct MetricDisplay<'a> {
    /// The value to display
    value: String,
    /// The unit label
    unit: &'a str,
    /// The figure's name
    label: &'a str,
    /// Optional accent color
    color: Option<Color32>,
    /// Size multiplier
    size: MetricSize,
}

/// Size variants for metric display.
#[derive(Debug, Clone, Copy, Default)]
pub enum MetricSize {
    /// Secondary figures
    Small,
    /// Standard figures
    #[default]
    Medium,
    /// Primary result of a screen
    Large,
}

impl MetricSize {
    fn value_size(&self) -> f32 {
        match self {
            MetricSize::Small => 24.0,
            MetricSize::Medium => 36.0,
            MetricSize::Large => 56.0,
        }
    }

    fn unit_size(&self) -> f32 {
        match self {
            MetricSize::Small => 12.0,
            MetricSize::Medium => 14.0,
            MetricSize::Large => 18.0,
        }
    }

    fn label_size(&self) -> f32 {
        match self {
            MetricSize::Small => 11.0,
            MetricSize::Medium => 13.0,
            MetricSize::Large => 15.0,
        }
    }

    fn min_size(&self) -> Vec2 {
        match self {
            MetricSize::Small => Vec2::new(80.0, 56.0),
            MetricSize::Medium => Vec2::new(120.0, 72.0),
            MetricSize::Large => Vec2::new(200.0, 96.0),
        }
    }
}

impl<'a> MetricDisplay<'a> {
    /// Create a new metric display.
    pub fn new(value: impl Into<String>, unit: &'a str, label: &'a str) -> Self {
        Self {
            value: value.into(),
            unit,
            label,
            color: None,
            size: MetricSize::default(),
        }
    }

    /// A Maffetone aerobic range, or a placeholder when the inputs were invalid.
    pub fn heart_rate_range(range: Option<&MaffetoneRange>, label: &'a str) -> Self {
        let value = range
            .map(|r| format!("{:.0}-{:.0}", r.low, r.high))
            .unwrap_or_else(|| "--".to_string());
        Self::new(value, "bpm", label)
    }

    /// A single heart rate.
    pub fn heart_rate(bpm: f64, label: &'a str) -> Self {
        Self::new(format!("{:.0}", bpm), "bpm", label)
    }

    /// A finishing time in seconds.
    pub fn race_time(seconds: Option<f64>, label: &'a str) -> Self {
        let value = seconds
            .map(format_race_time)
            .unwrap_or_else(|| TIME_PLACEHOLDER.to_string());
        Self::new(value, "", label)
    }

    /// A pace in seconds per `unit`.
    pub fn pace(seconds_per_unit: Option<f64>, unit: &'a str, label: &'a str) -> Self {
        let value = seconds_per_unit
            .map(format_pace)
            .unwrap_or_else(|| PACE_PLACEHOLDER.to_string());
        Self::new(value, unit, label)
    }

    /// A VDOT score.
    pub fn vdot(vdot: Option<f64>) -> Self {
        let value = vdot
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "--".to_string());
        Self::new(value, "", "VDOT")
    }

    /// Set an accent color for the value.
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the display size.
    pub fn with_size(mut self, size: MetricSize) -> Self {
        self.size = size;
        self
    }

    /// Render the metric display.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new().inner_margin(8.0).show(ui, |ui| {
            ui.set_min_size(self.size.min_size());

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(
                    RichText::new(self.label)
                        .size(self.size.label_size())
                        .weak(),
                );

                ui.add_space(4.0);

                let mut value_text = RichText::new(&self.value)
                    .size(self.size.value_size())
                    .strong();
                if let Some(color) = self.color {
                    value_text = value_text.color(color);
                }

                ui.horizontal(|ui| {
                    ui.label(value_text);
                    if !self.unit.is_empty() {
                        ui.label(RichText::new(self.unit).size(self.size.unit_size()).weak());
                    }
                });
            });
        });
    }
}
