use chrono::DateTime;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const MONTH_WINDOW_MS: i64 = 30 * DAY_MS;

/// Human-readable "opened N ago" label for a recent project.
///
/// Anything under a minute (or with a nonsense timestamp) reads "just now";
/// beyond a 30-day window the absolute date is shown instead ("Mar 4").
pub fn format_relative_opened_at(opened_at_ms: i64, now_ms: i64) -> String {
    if opened_at_ms <= 0 || now_ms <= 0 {
        return "just now".to_string();
    }

    let delta = now_ms - opened_at_ms;

    if delta < MINUTE_MS {
        return "just now".to_string();
    }
    if delta < HOUR_MS {
        return format!("{}m ago", delta / MINUTE_MS);
    }
    if delta < DAY_MS {
        return format!("{}h ago", delta / HOUR_MS);
    }
    if delta < MONTH_WINDOW_MS {
        return format!("{}d ago", delta / DAY_MS);
    }

    match DateTime::from_timestamp_millis(opened_at_ms) {
        Some(dt) => dt.format("%b %-d").to_string(),
        None => "just now".to_string(),
    }
}
