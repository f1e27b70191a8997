//! UI theme definitions.

use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Colour theme of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Colours of one theme.
pub struct Palette {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub border: Color32,
}

/// Dark theme colors (slate with a sky accent).
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(2, 6, 23);
    pub const PANEL_BG: Color32 = Color32::from_rgb(15, 23, 42);
    pub const CARD_BG: Color32 = Color32::from_rgb(30, 41, 59);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(241, 245, 249);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 163, 184);
    pub const ACCENT: Color32 = Color32::from_rgb(14, 165, 233);
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
    pub const BORDER: Color32 = Color32::from_rgb(51, 65, 85);

    pub const PALETTE: Palette = Palette {
        background: Self::BACKGROUND,
        panel: Self::PANEL_BG,
        card: Self::CARD_BG,
        hover: Color32::from_rgb(51, 65, 85),
        text_primary: Self::TEXT_PRIMARY,
        text_secondary: Self::TEXT_SECONDARY,
        accent: Self::ACCENT,
        error: Self::ERROR,
        border: Self::BORDER,
    };
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 250, 252);
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(241, 245, 249);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(15, 23, 42);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(71, 85, 105);
    pub const ACCENT: Color32 = Color32::from_rgb(2, 132, 199);
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    pub const BORDER: Color32 = Color32::from_rgb(203, 213, 225);

    pub const PALETTE: Palette = Palette {
        background: Self::BACKGROUND,
        panel: Self::PANEL_BG,
        card: Self::CARD_BG,
        hover: Color32::from_rgb(226, 232, 240),
        text_primary: Self::TEXT_PRIMARY,
        text_secondary: Self::TEXT_SECONDARY,
        accent: Self::ACCENT,
        error: Self::ERROR,
        border: Self::BORDER,
    };
}

fn dark_visuals() -> Visuals {
    apply_palette(Visuals::dark(), &DarkTheme::PALETTE, 0.4)
}

fn light_visuals() -> Visuals {
    apply_palette(Visuals::light(), &LightTheme::PALETTE, 0.2)
}

/// Paint egui's base visuals with a palette.
fn apply_palette(mut visuals: Visuals, palette: &Palette, selection_alpha: f32) -> Visuals {
    visuals.window_fill = palette.panel;
    visuals.panel_fill = palette.panel;
    visuals.faint_bg_color = palette.card;
    visuals.extreme_bg_color = palette.background;

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = palette.card;
    widgets.inactive.bg_fill = palette.card;
    widgets.hovered.bg_fill = palette.hover;
    widgets.active.bg_fill = palette.accent;

    widgets.noninteractive.fg_stroke.color = palette.text_primary;
    widgets.inactive.fg_stroke.color = palette.text_secondary;
    widgets.hovered.fg_stroke.color = palette.text_primary;
    widgets.active.fg_stroke.color = Color32::WHITE;

    widgets.noninteractive.bg_stroke.color = palette.border;
    widgets.inactive.bg_stroke.color = palette.border;

    visuals.selection.bg_fill = palette.accent.linear_multiply(selection_alpha);
    visuals.selection.stroke.color = palette.accent;
    visuals.error_fg_color = palette.error;

    visuals
}

/// Heart rate zone and interval colours.
pub mod zone_colors {
    use egui::Color32;

    use crate::workouts::IntervalKind;

    pub const Z1_RECOVERY: Color32 = Color32::from_rgb(128, 128, 128);
    pub const Z2_ENDURANCE: Color32 = Color32::from_rgb(0, 128, 255);
    pub const Z3_TEMPO: Color32 = Color32::from_rgb(0, 200, 100);
    pub const Z4_THRESHOLD: Color32 = Color32::from_rgb(255, 200, 0);
    pub const Z5_VO2MAX: Color32 = Color32::from_rgb(255, 50, 50);

    /// Get the color for a HR zone (1-5).
    pub fn hr_zone_color(zone: u8) -> Color32 {
        match zone {
            1 => Z1_RECOVERY,
            2 => Z2_ENDURANCE,
            3 => Z3_TEMPO,
            4 => Z4_THRESHOLD,
            5 => Z5_VO2MAX,
            _ => Color32::GRAY,
        }
    }

    /// Get the color for an interval kind.
    pub fn interval_color(kind: IntervalKind) -> Color32 {
        match kind {
            IntervalKind::Warmup => Z3_TEMPO,
            IntervalKind::Work => Z5_VO2MAX,
            IntervalKind::Rest => Z2_ENDURANCE,
            IntervalKind::Cooldown => Z1_RECOVERY,
        }
    }
}
