//! HIIT plan generation.
//!
//! Maps a training goal and a total duration to a warmup, alternating
//! work/rest intervals and a cooldown.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{IntervalKind, IntervalSpec, WorkoutError, WorkoutPlan, WorkoutStats};

/// Longest plan that can be generated, in minutes.
pub const MAX_DURATION_MINUTES: f64 = 60.0;

const WARMUP_INTENSITY: &str = "Easy pace - prepare your body";
const REST_INTENSITY: &str = "Active recovery or complete rest";
const COOLDOWN_INTENSITY: &str = "Easy pace - bring heart rate down";

/// Training goal of a HIIT plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HiitGoal {
    Beginner,
    #[default]
    FatBurn,
    Endurance,
    Power,
}

impl HiitGoal {
    pub const ALL: [HiitGoal; 4] = [
        HiitGoal::Beginner,
        HiitGoal::FatBurn,
        HiitGoal::Endurance,
        HiitGoal::Power,
    ];

    /// Preset durations and text for this goal.
    pub fn preset(&self) -> &'static WorkoutPreset {
        match self {
            HiitGoal::Beginner => &BEGINNER,
            HiitGoal::FatBurn => &FAT_BURN,
            HiitGoal::Endurance => &ENDURANCE,
            HiitGoal::Power => &POWER,
        }
    }

    /// Seconds per ratio unit when a custom work:rest ratio is given.
    pub fn ratio_base_seconds(&self) -> u32 {
        match self {
            HiitGoal::Endurance | HiitGoal::FatBurn => 30,
            HiitGoal::Beginner | HiitGoal::Power => 20,
        }
    }
}

impl std::fmt::Display for HiitGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HiitGoal::Beginner => write!(f, "beginner"),
            HiitGoal::FatBurn => write!(f, "fat-burn"),
            HiitGoal::Endurance => write!(f, "endurance"),
            HiitGoal::Power => write!(f, "power"),
        }
    }
}

impl FromStr for HiitGoal {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(HiitGoal::Beginner),
            "fat-burn" => Ok(HiitGoal::FatBurn),
            "endurance" => Ok(HiitGoal::Endurance),
            "power" => Ok(HiitGoal::Power),
            other => Err(WorkoutError::InvalidWorkout(format!(
                "unknown HIIT goal '{}'",
                other
            ))),
        }
    }
}

/// Fixed parameters for a goal.
#[derive(Debug, PartialEq, Eq)]
pub struct WorkoutPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub work_seconds: u32,
    pub rest_seconds: u32,
    pub warmup_seconds: u32,
    pub cooldown_seconds: u32,
    pub intensity: &'static str,
    pub recommendations: [&'static str; 5],
}

static BEGINNER: WorkoutPreset = WorkoutPreset {
    name: "Beginner HIIT",
    description:
        "A gentle introduction to high-intensity interval training with longer rest periods",
    work_seconds: 20,
    rest_seconds: 40,
    warmup_seconds: 300,
    cooldown_seconds: 300,
    intensity: "60-70% max effort",
    recommendations: [
        "Focus on learning proper form rather than speed",
        "Start with 2-3 sessions per week",
        "Gradually decrease rest time as fitness improves",
        "Stay well hydrated before, during, and after",
        "Listen to your body and take extra rest if needed",
    ],
};

static FAT_BURN: WorkoutPreset = WorkoutPreset {
    name: "Fat Burning HIIT",
    description: "Optimized for maximum calorie burn and fat oxidation",
    work_seconds: 30,
    rest_seconds: 30,
    warmup_seconds: 300,
    cooldown_seconds: 180,
    intensity: "75-85% max effort",
    recommendations: [
        "Perform on an empty stomach or 2-3 hours after eating",
        "Maintain intensity in the \"uncomfortable but sustainable\" zone",
        "Combine with strength training 2x per week",
        "Ensure 48 hours recovery between HIIT sessions",
        "Monitor heart rate to stay in fat-burning zone",
    ],
};

static ENDURANCE: WorkoutPreset = WorkoutPreset {
    name: "Endurance HIIT",
    description: "Build cardiovascular endurance with longer work intervals",
    work_seconds: 60,
    rest_seconds: 30,
    warmup_seconds: 300,
    cooldown_seconds: 300,
    intensity: "70-80% max effort",
    recommendations: [
        "Pace yourself to maintain consistent intensity",
        "Focus on breathing rhythm during work intervals",
        "Perform 2-3 sessions per week for best results",
        "Complement with long, slow distance training",
        "Track progress by monitoring heart rate recovery",
    ],
};

static POWER: WorkoutPreset = WorkoutPreset {
    name: "Power & Speed HIIT",
    description: "Maximum intensity bursts for explosive power development",
    work_seconds: 20,
    rest_seconds: 60,
    warmup_seconds: 420,
    cooldown_seconds: 300,
    intensity: "90-100% max effort",
    recommendations: [
        "Go all-out during work intervals - maximum effort",
        "Use the full rest period for complete recovery",
        "Limit to 1-2 sessions per week due to intensity",
        "Requires solid fitness base - not for beginners",
        "Perfect for athletes training for explosive sports",
    ],
};

/// A custom work:rest ratio such as "2:1".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkRestRatio {
    pub work: u32,
    pub rest: u32,
}

impl FromStr for WorkRestRatio {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WorkoutError::InvalidRatio(s.to_string());

        let (work, rest) = s.split_once(':').ok_or_else(invalid)?;
        let work: u32 = work.trim().parse().map_err(|_| invalid())?;
        let rest: u32 = rest.trim().parse().map_err(|_| invalid())?;

        if work == 0 || rest == 0 {
            return Err(invalid());
        }

        Ok(Self { work, rest })
    }
}

impl std::fmt::Display for WorkRestRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.work, self.rest)
    }
}

/// Generate a HIIT plan.
///
/// An unparseable or non-positive `work_rest_ratio` falls back to the goal's
/// preset work and rest durations. The plan's total duration is the sum of
/// whole intervals and may be shorter than requested.
pub fn build_plan(
    goal: HiitGoal,
    total_duration_minutes: f64,
    work_rest_ratio: Option<&str>,
) -> Result<WorkoutPlan, WorkoutError> {
    if !total_duration_minutes.is_finite()
        || total_duration_minutes <= 0.0
        || total_duration_minutes > MAX_DURATION_MINUTES
    {
        return Err(WorkoutError::InvalidDuration(total_duration_minutes));
    }

    let preset = goal.preset();
    let total_seconds = (total_duration_minutes * 60.0).floor() as i64;

    let (work_seconds, rest_seconds) = match work_rest_ratio.map(str::parse::<WorkRestRatio>) {
        Some(Ok(ratio)) => {
            let base = goal.ratio_base_seconds();
            (
                base.saturating_mul(ratio.work),
                base.saturating_mul(ratio.rest),
            )
        }
        Some(Err(e)) => {
            tracing::debug!("{}, using preset durations", e);
            (preset.work_seconds, preset.rest_seconds)
        }
        None => (preset.work_seconds, preset.rest_seconds),
    };

    let interval_time =
        total_seconds - i64::from(preset.warmup_seconds) - i64::from(preset.cooldown_seconds);
    if interval_time <= 0 {
        return Err(WorkoutError::InsufficientTime(format!(
            "{} minutes does not cover warmup and cooldown",
            total_duration_minutes
        )));
    }

    let cycle = i64::from(work_seconds) + i64::from(rest_seconds);
    let num_intervals = interval_time / cycle;
    if num_intervals < 1 {
        return Err(WorkoutError::InsufficientTime(format!(
            "no room for a {}s work / {}s rest cycle",
            work_seconds, rest_seconds
        )));
    }

    let mut intervals = Vec::with_capacity(num_intervals as usize * 2 + 1);
    intervals.push(IntervalSpec::new(
        IntervalKind::Warmup,
        preset.warmup_seconds,
        Some(WARMUP_INTENSITY.to_string()),
    )?);

    for i in 0..num_intervals {
        intervals.push(IntervalSpec::new(
            IntervalKind::Work,
            work_seconds,
            Some(preset.intensity.to_string()),
        )?);

        // No rest after the final effort
        if i < num_intervals - 1 {
            intervals.push(IntervalSpec::new(
                IntervalKind::Rest,
                rest_seconds,
                Some(REST_INTENSITY.to_string()),
            )?);
        }
    }

    intervals.push(IntervalSpec::new(
        IntervalKind::Cooldown,
        preset.cooldown_seconds,
        Some(COOLDOWN_INTENSITY.to_string()),
    )?);

    let plan = WorkoutPlan::new(
        preset.name,
        preset.description,
        preset.recommendations.iter().map(|r| r.to_string()).collect(),
        intervals,
    )?;

    tracing::debug!(
        "Generated {} plan: {} work intervals, {:.1} minutes",
        goal,
        num_intervals,
        plan.total_duration_minutes()
    );

    Ok(plan)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Aggregate work/rest figures and the reduced work:rest ratio.
pub fn stats(plan: &WorkoutPlan) -> WorkoutStats {
    let (work_count, total_work) = plan
        .intervals_of(IntervalKind::Work)
        .fold((0usize, 0u32), |(n, sum), i| {
            (n + 1, sum.saturating_add(i.duration_seconds()))
        });
    let (rest_count, total_rest) = plan
        .intervals_of(IntervalKind::Rest)
        .fold((0usize, 0u32), |(n, sum), i| {
            (n + 1, sum.saturating_add(i.duration_seconds()))
        });

    let avg_work = (total_work as f64 / work_count.max(1) as f64).round() as u64;
    let avg_rest = (total_rest as f64 / rest_count.max(1) as f64).round() as u64;

    let ratio = match (avg_work, avg_rest) {
        (0, _) => "1:1".to_string(),
        (_, 0) => "1:0".to_string(),
        (w, r) => {
            let divisor = gcd(w, r);
            format!("{}:{}", w / divisor, r / divisor)
        }
    };

    WorkoutStats {
        total_work_seconds: total_work,
        total_rest_seconds: total_rest,
        work_intervals: work_count,
        ratio,
    }
}

/// A generated plan packaged for export.
#[derive(Debug, Clone, Serialize)]
pub struct PlanExport<'a> {
    pub goal: HiitGoal,
    pub requested_minutes: f64,
    pub generated_at: DateTime<Utc>,
    pub plan: &'a WorkoutPlan,
    pub stats: WorkoutStats,
}

impl<'a> PlanExport<'a> {
    pub fn new(goal: HiitGoal, requested_minutes: f64, plan: &'a WorkoutPlan) -> Self {
        Self {
            goal,
            requested_minutes,
            generated_at: Utc::now(),
            plan,
            stats: stats(plan),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Format a duration compactly: "45s", "5m", "1m 30s".
pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;

    match (mins, secs) {
        (0, s) => format!("{}s", s),
        (m, 0) => format!("{}m", m),
        (m, s) => format!("{}m {}s", m, s),
    }
}
