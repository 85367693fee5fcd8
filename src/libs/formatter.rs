//! Formatting helpers for report and export output.
//!
//! - [`format_hours`]: decimal hours with two places, as printed in reports
//! - [`format_percent`]: ratio with two places and a `%` sign

pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio)
}
