//! Integration tests for configuration persistence.

use rustrun::audio::AudioConfig;
use rustrun::formulas::TrainingStatus;
use rustrun::storage::{
    load_config_from, save_config_to, AppConfig, CalculatorDefaults, ConfigError, UiSettings,
    Units,
};
use rustrun::ui::Theme;
use rustrun::workouts::HiitGoal;

fn custom_config() -> AppConfig {
    AppConfig {
        ui: UiSettings {
            theme: Theme::Light,
            units: Units::Imperial,
            font_scale: 1.25,
        },
        audio: AudioConfig {
            enabled: false,
            volume: 40,
        },
        defaults: CalculatorDefaults {
            age: Some(45),
            resting_hr: Some(52),
            training_status: TrainingStatus::Seasoned,
            timer_rounds: 3,
            hiit_goal: HiitGoal::Power,
            hiit_minutes: 30,
        },
        ..AppConfig::default()
    }
}

/// Test that a saved config loads back unchanged.
#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = custom_config();
    save_config_to(&config, &path).unwrap();
    assert!(path.exists());

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
}

/// Test that unset optional defaults stay unset.
#[test]
fn test_round_trip_without_optional_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = AppConfig::default();
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.defaults.age, None);
    assert_eq!(loaded.defaults.resting_hr, None);
    assert_eq!(loaded, config);
}

/// Test that a missing file yields defaults.
#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_config_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, AppConfig::default());
}

/// Test that keys absent from the file take their default values.
#[test]
fn test_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[defaults]
age = 50
hiit_goal = "endurance"

[audio]
volume = 10
"#,
    )
    .unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.defaults.age, Some(50));
    assert_eq!(loaded.defaults.hiit_goal, HiitGoal::Endurance);
    assert_eq!(loaded.defaults.hiit_minutes, 20);
    assert!(loaded.audio.enabled);
    assert_eq!(loaded.audio.volume, 10);
    assert_eq!(loaded.ui, UiSettings::default());
}

/// Test that malformed content is reported as a parse error.
#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui\ntheme = ").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that an unknown enum value is rejected rather than silently replaced.
#[test]
fn test_unknown_units_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\nunits = \"furlongs\"\n").unwrap();

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::ParseError(_))
    ));
}
