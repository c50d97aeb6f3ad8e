//! Relative timestamps for listing cards and notifications.

use chrono::{DateTime, Utc};

/// Render `then` relative to `now`: "Just now", "5m ago", "3h ago",
/// "2d ago", or the calendar date once a week has passed.
///
/// Timestamps in the future render as "Just now".
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{}d ago", days);
    }

    then.format("%Y-%m-%d").to_string()
}
