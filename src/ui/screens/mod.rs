//! UI screens for the application.

pub mod exercise_timer;
pub mod hiit;
pub mod home;
pub mod karvonen;
pub mod maffetone;
pub mod magic_mile;
pub mod pace;
pub mod riegel;
pub mod settings;
pub mod vdot;

pub use exercise_timer::ExerciseTimerScreen;
pub use hiit::HiitScreen;
pub use home::HomeScreen;
pub use karvonen::KarvonenScreen;
pub use maffetone::MaffetoneScreen;
pub use magic_mile::MagicMileScreen;
pub use pace::PaceScreen;
pub use riegel::RiegelScreen;
pub use settings::{SettingsAction, SettingsScreen};
pub use vdot::VdotScreen;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Calculator menu
    #[default]
    Home,
    /// Maffetone aerobic heart rate
    Maffetone,
    /// Karvonen heart rate zones
    Karvonen,
    /// Riegel race time prediction
    Riegel,
    /// VDOT training paces and predictions
    Vdot,
    /// Magic Mile race predictions
    MagicMile,
    /// Pace converter
    Pace,
    /// HIIT plan generator
    Hiit,
    /// Strength routine interval timer
    ExerciseTimer,
    /// Settings screen
    Settings,
}

impl Screen {
    /// Calculator screens listed on the home menu.
    pub const CALCULATORS: [Screen; 8] = [
        Screen::Maffetone,
        Screen::Karvonen,
        Screen::Riegel,
        Screen::Vdot,
        Screen::MagicMile,
        Screen::Pace,
        Screen::Hiit,
        Screen::ExerciseTimer,
    ];

    /// Title shown in the top bar and on menu buttons.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "RustRun",
            Screen::Maffetone => "Maffetone Heart Rate",
            Screen::Karvonen => "Karvonen Zones",
            Screen::Riegel => "Race Time Predictor",
            Screen::Vdot => "VDOT Calculator",
            Screen::MagicMile => "Magic Mile",
            Screen::Pace => "Pace Converter",
            Screen::Hiit => "HIIT Generator",
            Screen::ExerciseTimer => "Strength Timer",
            Screen::Settings => "Settings",
        }
    }

    /// One-line description for the home menu.
    pub fn blurb(&self) -> &'static str {
        match self {
            Screen::Home => "Running calculators",
            Screen::Maffetone => "Aerobic training heart rate (180 formula)",
            Screen::Karvonen => "Five heart rate zones from heart rate reserve",
            Screen::Riegel => "Predict a race time from a recent result",
            Screen::Vdot => "Training paces and equivalent race times",
            Screen::MagicMile => "Race paces from a one-mile time trial",
            Screen::Pace => "Convert min/mile and min/km",
            Screen::Hiit => "Build a warmup, work/rest and cooldown plan",
            Screen::ExerciseTimer => "10-minute strength circuit with audio cues",
            Screen::Settings => "Theme, units, audio and defaults",
        }
    }
}
