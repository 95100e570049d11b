use chrono::{DateTime, Local, Utc};

/// Format a chat message timestamp with tiered display:
/// - "just now" under a minute
/// - "5m ago" under an hour
/// - Local clock time ("14:32") otherwise
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let seconds = now.signed_duration_since(*timestamp).num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}
