//! UI widgets for reusable components.

pub mod metric_display;
pub mod plan_chart;
pub mod time_input;
pub mod zone_indicator;

pub use metric_display::{MetricDisplay, MetricSize};
pub use plan_chart::PlanChart;
pub use time_input::TimeInput;
pub use zone_indicator::ZoneIndicator;
