//! Formatting and parsing helpers shared by commands and views.
//!
//! Durations render as compact "2h 15m" strings, timestamps of the running
//! session render as relative "2 hours ago" phrases, and date arguments
//! accept ISO dates plus the `today`/`yesterday` keywords.

use crate::libs::messages::Message;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Formats a duration as "45m", "2h", or "2h 30m". Sub-minute remainders
/// are dropped; negative durations clamp to "0m".
pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        return format!("{}m", mins);
    }
    if mins == 0 {
        return format!("{}h", hours);
    }
    format!("{}h {}m", hours, mins)
}

/// Renders a past timestamp as a relative phrase: "just now", "5 minutes
/// ago", "yesterday", "3 weeks ago".
pub fn time_ago(then: NaiveDateTime) -> String {
    let delta = Local::now().naive_local() - then;

    let days = delta.num_days();
    if days > 0 {
        return match days {
            1 => "yesterday".to_string(),
            2..=6 => format!("{} days ago", days),
            7..=29 => plural(days / 7, "week"),
            _ => plural(days / 30, "month"),
        };
    }

    let hours = delta.num_hours();
    if hours > 0 {
        return plural(hours, "hour");
    }
    let minutes = delta.num_minutes();
    if minutes > 0 {
        return plural(minutes, "minute");
    }
    "just now".to_string()
}

/// Parses a date argument: `YYYY-MM-DD`, `today`, or `yesterday`.
/// Used as a clap value parser, so the error is the user-facing message.
pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "today" => Ok(Local::now().date_naive()),
        "yesterday" => Ok(Local::now().date_naive() - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| Message::InvalidDate(other.to_string()).to_string()),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
