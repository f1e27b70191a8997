//! Application configuration persisted as TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audio::AudioConfig;
use crate::formulas::TrainingStatus;
use crate::ui::theme::Theme;
use crate::workouts::HiitGoal;

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kilometres, min/km
    #[default]
    Metric,
    /// Miles, min/mile
    Imperial,
}

impl Units {
    /// Distance unit label.
    pub fn distance_label(&self) -> &'static str {
        match self {
            Units::Metric => "km",
            Units::Imperial => "mi",
        }
    }

    /// Pace unit label.
    pub fn pace_label(&self) -> &'static str {
        match self {
            Units::Metric => "min/km",
            Units::Imperial => "min/mile",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Metric => write!(f, "Metric"),
            Units::Imperial => write!(f, "Imperial"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// UI settings
    pub ui: UiSettings,
    /// Timer cue settings
    pub audio: AudioConfig,
    /// Values the calculator forms start with
    pub defaults: CalculatorDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            ui: UiSettings::default(),
            audio: AudioConfig::default(),
            defaults: CalculatorDefaults::default(),
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Colour theme
    pub theme: Theme,
    /// Unit preference for distance and pace inputs
    pub units: Units,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            units: Units::Metric,
            font_scale: 1.0,
        }
    }
}

/// Starting values for the calculator forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    /// Age in years
    pub age: Option<u32>,
    /// Resting heart rate in bpm
    pub resting_hr: Option<u32>,
    /// Maffetone training status
    pub training_status: TrainingStatus,
    /// Rounds of the strength routine
    pub timer_rounds: u32,
    /// HIIT generator goal
    pub hiit_goal: HiitGoal,
    /// HIIT generator duration in minutes
    pub hiit_minutes: u32,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            age: None,
            resting_hr: None,
            training_status: TrainingStatus::Steady,
            timer_rounds: crate::workouts::library::STRENGTH_ROUNDS,
            hiit_goal: HiitGoal::FatBurn,
            hiit_minutes: 20,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "rustrun", "RustRun")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

/// Load application configuration from the data directory.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Save application configuration to the data directory.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
