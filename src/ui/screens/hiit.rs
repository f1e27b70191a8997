//! HIIT plan generator screen.

use egui::{RichText, Ui};

use crate::storage::CalculatorDefaults;
use crate::ui::theme::zone_colors::interval_color;
use crate::ui::widgets::PlanChart;
use crate::workouts::{
    build_plan, format_duration, stats, HiitGoal, PlanExport, WorkoutPlan, WorkoutStats,
};

/// Ratio presets offered next to the custom ratio field.
const RATIO_PRESETS: [&str; 4] = ["2:1", "1:1", "1:2", "3:1"];

fn goal_label(goal: HiitGoal) -> &'static str {
    match goal {
        HiitGoal::Beginner => "New to HIIT - Build foundation and learn proper form",
        HiitGoal::FatBurn => "Fat Burning - Maximize calorie burn and fat oxidation",
        HiitGoal::Endurance => "Endurance - Build cardiovascular stamina",
        HiitGoal::Power => "Power & Speed - Explosive performance (advanced)",
    }
}

/// HIIT generator state.
pub struct HiitScreen {
    goal: HiitGoal,
    minutes_input: String,
    use_custom_ratio: bool,
    ratio_input: String,
    plan: Option<(WorkoutPlan, WorkoutStats)>,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl HiitScreen {
    pub fn new(defaults: &CalculatorDefaults) -> Self {
        let mut screen = Self {
            goal: defaults.hiit_goal,
            minutes_input: defaults.hiit_minutes.to_string(),
            use_custom_ratio: false,
            ratio_input: "1:1".to_string(),
            plan: None,
            error_message: None,
            status_message: None,
        };
        screen.regenerate();
        screen
    }

    fn requested_minutes(&self) -> f64 {
        self.minutes_input.trim().parse().unwrap_or(f64::NAN)
    }

    /// Rebuild the plan from the current inputs.
    pub fn regenerate(&mut self) {
        let ratio = self.use_custom_ratio.then_some(self.ratio_input.as_str());
        self.status_message = None;

        match build_plan(self.goal, self.requested_minutes(), ratio) {
            Ok(plan) => {
                let plan_stats = stats(&plan);
                tracing::debug!(
                    "Generated {} plan: {} intervals, {:.1} min",
                    self.goal,
                    plan.intervals().len(),
                    plan.total_duration_minutes()
                );
                self.plan = Some((plan, plan_stats));
                self.error_message = None;
            }
            Err(e) => {
                self.plan = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Current plan and its figures.
    pub fn plan(&self) -> Option<&(WorkoutPlan, WorkoutStats)> {
        self.plan.as_ref()
    }

    /// Pretty JSON export of the current plan.
    pub fn export_json(&self) -> Option<String> {
        let (plan, _) = self.plan.as_ref()?;
        match PlanExport::new(self.goal, self.requested_minutes(), plan).to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!("Failed to serialize HIIT plan: {}", e);
                None
            }
        }
    }

    /// Render the screen. Returns a plan when the user asks to run it.
    pub fn show(&mut self, ui: &mut Ui) -> Option<WorkoutPlan> {
        let mut changed = false;
        let mut run_plan = None;

        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);

            ui.label(RichText::new("What's your training goal?").strong());
            for goal in HiitGoal::ALL {
                changed |= ui.radio_value(&mut self.goal, goal, goal_label(goal)).changed();
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("How much time do you have?");
                changed |= ui
                    .add(egui::TextEdit::singleline(&mut self.minutes_input).desired_width(48.0))
                    .changed();
                ui.label("minutes");
            });

            ui.add_space(8.0);
            changed |= ui
                .checkbox(&mut self.use_custom_ratio, "Customize work/rest ratio")
                .changed();

            if self.use_custom_ratio {
                ui.horizontal(|ui| {
                    for preset in RATIO_PRESETS {
                        if ui
                            .selectable_label(self.ratio_input == preset, preset)
                            .clicked()
                        {
                            self.ratio_input = preset.to_string();
                            changed = true;
                        }
                    }
                    changed |= ui
                        .add(egui::TextEdit::singleline(&mut self.ratio_input).desired_width(48.0))
                        .changed();
                });
            }
        });

        if changed {
            self.regenerate();
        }

        ui.add_space(16.0);

        if let Some(error) = &self.error_message {
            ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
            return None;
        }

        let Some((plan, plan_stats)) = &self.plan else {
            return None;
        };

        ui.label(RichText::new(plan.name()).size(20.0).strong());
        ui.label(RichText::new(plan.description()).weak());
        ui.add_space(8.0);

        egui::Grid::new("hiit_stats")
            .num_columns(4)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.label(format!("Total: {:.1} min", plan.total_duration_minutes()));
                ui.label(format!("Work: {}", format_duration(plan_stats.total_work_seconds)));
                ui.label(format!("Rest: {}", format_duration(plan_stats.total_rest_seconds)));
                ui.label(format!(
                    "{} intervals at {}",
                    plan_stats.work_intervals, plan_stats.ratio
                ));
                ui.end_row();
            });

        ui.add_space(8.0);
        PlanChart::new(plan).show(ui);
        ui.add_space(8.0);

        ui.collapsing("Intervals", |ui| {
            egui::Grid::new("hiit_intervals")
                .num_columns(3)
                .striped(true)
                .show(ui, |ui| {
                    for (index, interval) in plan.intervals().iter().enumerate() {
                        ui.label(format!("{}.", index + 1));
                        ui.label(
                            RichText::new(interval.kind().to_string())
                                .color(interval_color(interval.kind())),
                        );
                        ui.label(format!(
                            "{} {}",
                            format_duration(interval.duration_seconds()),
                            interval.intensity().unwrap_or_default()
                        ));
                        ui.end_row();
                    }
                });
        });

        ui.collapsing("Recommendations", |ui| {
            for tip in plan.recommendations() {
                ui.label(format!("• {}", tip));
            }
        });

        ui.add_space(8.0);
        let mut copy_clicked = false;
        ui.horizontal(|ui| {
            if ui.button("Start Timer").clicked() {
                run_plan = Some(plan.clone());
            }
            copy_clicked = ui.button("Copy JSON").clicked();
            if let Some(message) = &self.status_message {
                ui.label(RichText::new(message).weak());
            }
        });

        if copy_clicked {
            if let Some(json) = self.export_json() {
                ui.ctx().copy_text(json);
                self.status_message = Some("Plan copied to clipboard".to_string());
            }
        }

        run_plan
    }
}
