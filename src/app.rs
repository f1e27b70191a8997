//! Main application state and egui integration.

use eframe::egui;

use rustrun::storage::config::{load_config, save_config, AppConfig};
use rustrun::ui::screens::{
    ExerciseTimerScreen, HiitScreen, HomeScreen, KarvonenScreen, MaffetoneScreen,
    MagicMileScreen, PaceScreen, RiegelScreen, Screen, SettingsAction, SettingsScreen,
    VdotScreen,
};
use rustrun::ui::theme::Theme;
use rustrun::workouts::{strength_routine, WorkoutPlan};

/// Main application state.
pub struct RustRunApp {
    /// Persisted configuration
    config: AppConfig,
    /// Current screen
    current_screen: Screen,
    /// Current theme
    theme: Theme,
    maffetone_screen: MaffetoneScreen,
    karvonen_screen: KarvonenScreen,
    riegel_screen: RiegelScreen,
    vdot_screen: VdotScreen,
    magic_mile_screen: MagicMileScreen,
    pace_screen: PaceScreen,
    hiit_screen: HiitScreen,
    /// Live only while the timer screen is shown
    timer_screen: Option<ExerciseTimerScreen>,
    settings_screen: SettingsScreen,
    /// Status bar message
    status: String,
}

impl RustRunApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = match load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                AppConfig::default()
            }
        };

        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        let defaults = &config.defaults;
        let units = config.ui.units;

        Self {
            current_screen: Screen::Home,
            theme,
            maffetone_screen: MaffetoneScreen::new(defaults),
            karvonen_screen: KarvonenScreen::new(defaults),
            riegel_screen: RiegelScreen::new(units),
            vdot_screen: VdotScreen::new(units),
            magic_mile_screen: MagicMileScreen::new(),
            pace_screen: PaceScreen::new(),
            hiit_screen: HiitScreen::new(defaults),
            timer_screen: None,
            settings_screen: SettingsScreen::new(config.clone()),
            status: "Ready".to_string(),
            config,
        }
    }

    /// Navigate to a different screen.
    fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);

        if self.current_screen == Screen::ExerciseTimer && screen != Screen::ExerciseTimer {
            // Dropping the screen drops its tick source
            self.timer_screen = None;
        }

        if screen == Screen::ExerciseTimer && self.timer_screen.is_none() {
            let routine = strength_routine().with_rounds(self.config.defaults.timer_rounds);
            match ExerciseTimerScreen::for_routine(&routine, &self.config.audio) {
                Ok(timer) => self.timer_screen = Some(timer),
                Err(e) => {
                    tracing::warn!("Cannot build strength routine: {}", e);
                    self.status = format!("Timer unavailable: {}", e);
                    return;
                }
            }
        }

        if screen == Screen::Settings {
            self.settings_screen = SettingsScreen::new(self.config.clone());
        }

        self.current_screen = screen;
    }

    /// Open the timer on a generated HIIT plan.
    fn run_plan(&mut self, plan: &WorkoutPlan) {
        match ExerciseTimerScreen::for_plan(plan, &self.config.audio) {
            Ok(timer) => {
                self.timer_screen = Some(timer);
                self.navigate(Screen::ExerciseTimer);
            }
            Err(e) => {
                tracing::warn!("Cannot run HIIT plan: {}", e);
                self.status = format!("Cannot run plan: {}", e);
            }
        }
    }

    /// Toggle the theme between dark and light.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = self.theme;
        if let Err(e) = save_config(&self.config) {
            tracing::warn!("Failed to save theme: {}", e);
        }
    }

    /// Adopt and persist the configuration edited on the settings screen.
    fn apply_settings(&mut self, ctx: &egui::Context, config: AppConfig) {
        let units_changed = config.ui.units != self.config.ui.units;
        let defaults_changed = config.defaults != self.config.defaults;
        self.config = config;

        self.theme = self.config.ui.theme;
        ctx.set_visuals(self.theme.visuals());
        ctx.set_zoom_factor(self.config.ui.font_scale);

        if units_changed {
            self.riegel_screen = RiegelScreen::new(self.config.ui.units);
            self.vdot_screen = VdotScreen::new(self.config.ui.units);
        }
        if defaults_changed {
            let defaults = &self.config.defaults;
            self.maffetone_screen = MaffetoneScreen::new(defaults);
            self.karvonen_screen = KarvonenScreen::new(defaults);
            self.hiit_screen = HiitScreen::new(defaults);
        }
        if let Some(timer) = self.timer_screen.as_mut() {
            timer.apply_audio_config(&self.config.audio);
        }

        self.status = match save_config(&self.config) {
            Ok(()) => "Settings saved".to_string(),
            Err(e) => {
                tracing::warn!("Failed to save config: {}", e);
                format!("Settings not saved: {}", e)
            }
        };
    }
}

impl eframe::App for RustRunApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.current_screen != Screen::Home {
            self.navigate(Screen::Home);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.current_screen != Screen::Home && ui.button("⬅ Home").clicked() {
                    self.navigate(Screen::Home);
                }
                ui.heading(self.current_screen.title());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }
                    ui.label(self.config.ui.units.to_string());
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.current_screen {
                Screen::Home => {
                    if let Some(next) = HomeScreen::show(ui) {
                        self.navigate(next);
                    }
                }
                Screen::Maffetone => self.maffetone_screen.show(ui),
                Screen::Karvonen => self.karvonen_screen.show(ui),
                Screen::Riegel => self.riegel_screen.show(ui),
                Screen::Vdot => self.vdot_screen.show(ui),
                Screen::MagicMile => self.magic_mile_screen.show(ui),
                Screen::Pace => self.pace_screen.show(ui),
                Screen::Hiit => {
                    if let Some(plan) = self.hiit_screen.show(ui) {
                        self.run_plan(&plan);
                    }
                }
                Screen::ExerciseTimer => match self.timer_screen.as_mut() {
                    Some(timer) => timer.show(ui),
                    None => {
                        self.navigate(Screen::Home);
                    }
                },
                Screen::Settings => match self.settings_screen.show(ui) {
                    SettingsAction::Save => {
                        let config = self.settings_screen.config.clone();
                        self.apply_settings(ctx, config);
                        self.navigate(Screen::Home);
                    }
                    SettingsAction::Cancel => {
                        self.navigate(Screen::Home);
                    }
                    SettingsAction::None => {}
                },
            });
        });
    }
}
