//! Step chart of a HIIT plan: effort level against elapsed minutes.

use egui::{Response, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::ui::theme::zone_colors::interval_color;
use crate::workouts::{format_duration, IntervalKind, WorkoutPlan};

/// Relative effort drawn for each interval kind.
fn effort_level(kind: IntervalKind) -> f64 {
    match kind {
        IntervalKind::Warmup | IntervalKind::Cooldown => 2.0,
        IntervalKind::Work => 4.0,
        IntervalKind::Rest => 1.0,
    }
}

/// HIIT plan chart widget.
pub struct PlanChart<'a> {
    plan: &'a WorkoutPlan,
    height: f32,
}

impl<'a> PlanChart<'a> {
    pub fn new(plan: &'a WorkoutPlan) -> Self {
        Self {
            plan,
            height: 160.0,
        }
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        let segments = segments(self.plan);

        Plot::new("hiit_plan_chart")
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_y(false)
            .include_y(0.0)
            .include_y(5.0)
            .x_axis_label("Minutes")
            .label_formatter(|name, value| {
                let at = format_duration((value.x * 60.0).round().max(0.0) as u32);
                if name.is_empty() {
                    at
                } else {
                    format!("{}\n{}", name, at)
                }
            })
            .show(ui, |plot_ui| {
                for segment in segments {
                    let line = Line::new(segment.kind.to_string(), PlotPoints::new(segment.points))
                        .color(interval_color(segment.kind))
                        .fill(0.0);
                    plot_ui.line(line);
                }
            })
            .response
    }
}

/// One interval as a flat run of plot points.
#[derive(Debug, Clone, PartialEq)]
struct Segment {
    kind: IntervalKind,
    points: Vec<[f64; 2]>,
}

/// Lay the plan's intervals end to end on a minutes axis.
fn segments(plan: &WorkoutPlan) -> Vec<Segment> {
    let mut elapsed = 0.0;

    plan.intervals()
        .iter()
        .map(|interval| {
            let start = elapsed;
            elapsed += f64::from(interval.duration_seconds()) / 60.0;
            let level = effort_level(interval.kind());
            Segment {
                kind: interval.kind(),
                points: vec![[start, level], [elapsed, level]],
            }
        })
        .collect()
}
