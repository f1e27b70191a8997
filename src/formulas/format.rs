//! Time and pace formatting shared by the calculator screens.

/// Placeholder shown when a pace cannot be computed.
pub const PACE_PLACEHOLDER: &str = "--:--";

/// Placeholder shown when a race time cannot be computed.
pub const TIME_PLACEHOLDER: &str = "--:--:--";

/// Round a non-negative number of seconds to whole seconds.
fn whole_seconds(seconds: f64) -> Option<u64> {
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds.round() as u64)
    } else {
        None
    }
}

/// Format a duration as `H:MM:SS`, or `M:SS` when under an hour.
///
/// Seconds are rounded first so that 59.6 s carries into the next minute.
pub fn format_race_time(seconds: f64) -> String {
    let Some(total) = whole_seconds(seconds) else {
        return TIME_PLACEHOLDER.to_string();
    };

    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;

    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Format a pace (seconds per unit distance) as `M:SS`.
pub fn format_pace(seconds_per_unit: f64) -> String {
    match whole_seconds(seconds_per_unit) {
        Some(total) => format!("{}:{:02}", total / 60, total % 60),
        None => PACE_PLACEHOLDER.to_string(),
    }
}

/// Parse a lenient integer field; blanks and garbage count as zero.
fn parse_field(value: &str) -> u32 {
    value.trim().parse::<u32>().unwrap_or(0)
}

/// Convert hour/minute/second form fields into total seconds.
pub fn hms_to_seconds(hours: &str, minutes: &str, seconds: &str) -> u32 {
    parse_field(hours)
        .saturating_mul(3600)
        .saturating_add(parse_field(minutes).saturating_mul(60))
        .saturating_add(parse_field(seconds))
}

/// Convert minute/second form fields into total seconds.
pub fn ms_to_seconds(minutes: &str, seconds: &str) -> u32 {
    hms_to_seconds("0", minutes, seconds)
}
