//! Settings screen: theme, units, audio cues and calculator defaults.

use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui};

use crate::formulas::TrainingStatus;
use crate::storage::{AppConfig, Units};
use crate::ui::theme::Theme;
use crate::workouts::plan::MAX_DURATION_MINUTES;
use crate::workouts::HiitGoal;

/// Settings screen state.
pub struct SettingsScreen {
    /// Configuration being edited
    pub config: AppConfig,
    /// Configuration as loaded (for cancel)
    original_config: AppConfig,
    /// Has unsaved changes
    pub has_changes: bool,
    /// Validation error message
    pub error_message: Option<String>,
    /// Input buffers for optional numeric fields
    age_input: String,
    resting_hr_input: String,
}

/// Actions that can result from the settings screen.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    /// No action
    None,
    /// Save changes and go back
    Save,
    /// Cancel changes and go back
    Cancel,
}

impl SettingsScreen {
    /// Create a new settings screen editing a copy of `config`.
    pub fn new(config: AppConfig) -> Self {
        let age_input = config
            .defaults
            .age
            .map(|v| v.to_string())
            .unwrap_or_default();
        let resting_hr_input = config
            .defaults
            .resting_hr
            .map(|v| v.to_string())
            .unwrap_or_default();

        Self {
            original_config: config.clone(),
            config,
            has_changes: false,
            error_message: None,
            age_input,
            resting_hr_input,
        }
    }

    /// Discard edits.
    pub fn revert(&mut self) {
        *self = Self::new(self.original_config.clone());
    }

    /// Check the text buffers and copy them into the configuration.
    pub fn validate(&mut self) -> bool {
        let age = match parse_optional(&self.age_input, 1..=120) {
            Ok(v) => v,
            Err(()) => {
                self.error_message = Some("Age must be between 1 and 120".to_string());
                return false;
            }
        };
        let resting_hr = match parse_optional(&self.resting_hr_input, 20..=150) {
            Ok(v) => v,
            Err(()) => {
                self.error_message =
                    Some("Resting heart rate must be between 20 and 150 bpm".to_string());
                return false;
            }
        };

        self.config.defaults.age = age;
        self.config.defaults.resting_hr = resting_hr;
        self.error_message = None;
        true
    }

    /// Render the settings screen.
    pub fn show(&mut self, ui: &mut Ui) -> SettingsAction {
        let mut action = SettingsAction::None;

        ui.horizontal(|ui| {
            ui.heading("Settings");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add_enabled(
                        self.has_changes,
                        egui::Button::new("Save").fill(Color32::from_rgb(52, 168, 83)),
                    )
                    .clicked()
                    && self.validate()
                {
                    action = SettingsAction::Save;
                }

                if ui.button("Cancel").clicked() {
                    self.revert();
                    action = SettingsAction::Cancel;
                }
            });
        });

        ui.separator();

        if let Some(ref error) = self.error_message {
            ui.label(RichText::new(format!("⚠ {}", error)).color(Color32::from_rgb(234, 67, 53)));
            ui.add_space(8.0);
        }

        ScrollArea::vertical().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            self.render_preferences_section(ui);
            ui.add_space(16.0);
            self.render_audio_section(ui);
            ui.add_space(16.0);
            self.render_defaults_section(ui);
            ui.add_space(32.0);
        });

        action
    }

    fn render_preferences_section(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);

            ui.label(RichText::new("Preferences").size(18.0).strong());
            ui.add_space(8.0);

            egui::Grid::new("preferences_grid")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Units:");
                    ui.horizontal(|ui| {
                        for units in [Units::Metric, Units::Imperial] {
                            let label = format!("{} ({})", units, units.pace_label());
                            if ui
                                .selectable_label(self.config.ui.units == units, label)
                                .clicked()
                            {
                                self.config.ui.units = units;
                                self.has_changes = true;
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("Theme:");
                    ui.horizontal(|ui| {
                        for theme in [Theme::Dark, Theme::Light] {
                            if ui
                                .selectable_label(self.config.ui.theme == theme, theme.to_string())
                                .clicked()
                            {
                                self.config.ui.theme = theme;
                                self.has_changes = true;
                            }
                        }
                    });
                    ui.end_row();

                    ui.label("Font scale:");
                    let scale = egui::Slider::new(&mut self.config.ui.font_scale, 0.75..=2.0)
                        .step_by(0.05);
                    if ui.add(scale).changed() {
                        self.has_changes = true;
                    }
                    ui.end_row();
                });
        });
    }

    fn render_audio_section(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);

            ui.label(RichText::new("Timer Cues").size(18.0).strong());
            ui.add_space(8.0);

            let toggle = ui.checkbox(
                &mut self.config.audio.enabled,
                "Play countdown and transition beeps",
            );
            if toggle.changed() {
                self.has_changes = true;
            }

            ui.add_enabled_ui(self.config.audio.enabled, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Volume:");
                    if ui
                        .add(egui::Slider::new(&mut self.config.audio.volume, 0..=100).suffix("%"))
                        .changed()
                    {
                        self.has_changes = true;
                    }
                });
            });
        });
    }

    fn render_defaults_section(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.set_min_width(ui.available_width() - 16.0);

            ui.label(RichText::new("Calculator Defaults").size(18.0).strong());
            ui.add_space(8.0);

            let defaults = &mut self.config.defaults;
            let mut changed = false;

            egui::Grid::new("defaults_grid")
                .num_columns(2)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Age:");
                    changed |= ui
                        .add(egui::TextEdit::singleline(&mut self.age_input).desired_width(80.0))
                        .changed();
                    ui.end_row();

                    ui.label("Resting HR (bpm):");
                    changed |= ui
                        .add(
                            egui::TextEdit::singleline(&mut self.resting_hr_input)
                                .desired_width(80.0),
                        )
                        .changed();
                    ui.end_row();

                    ui.label("Training status:");
                    egui::ComboBox::from_id_salt("default_training_status")
                        .selected_text(defaults.training_status.label())
                        .show_ui(ui, |ui| {
                            for status in TrainingStatus::ALL {
                                changed |= ui
                                    .selectable_value(
                                        &mut defaults.training_status,
                                        status,
                                        status.label(),
                                    )
                                    .changed();
                            }
                        });
                    ui.end_row();

                    ui.label("Strength rounds:");
                    changed |= ui
                        .add(egui::Slider::new(&mut defaults.timer_rounds, 1..=5))
                        .changed();
                    ui.end_row();

                    ui.label("HIIT goal:");
                    ui.horizontal(|ui| {
                        for goal in HiitGoal::ALL {
                            changed |= ui
                                .selectable_value(&mut defaults.hiit_goal, goal, goal.preset().name)
                                .changed();
                        }
                    });
                    ui.end_row();

                    ui.label("HIIT minutes:");
                    changed |= ui
                        .add(
                            egui::Slider::new(
                                &mut defaults.hiit_minutes,
                                5..=MAX_DURATION_MINUTES as u32,
                            )
                            .suffix(" min"),
                        )
                        .changed();
                    ui.end_row();
                });

            if changed {
                self.has_changes = true;
            }
        });
    }
}

/// Parse an optional whole-number field; blank means unset.
fn parse_optional(input: &str, range: std::ops::RangeInclusive<u32>) -> Result<Option<u32>, ()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(v) if range.contains(&v) => Ok(Some(v)),
        _ => Err(()),
    }
}
