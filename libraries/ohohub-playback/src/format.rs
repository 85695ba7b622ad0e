//! Display helpers for the transport bar

/// Format seconds as `MM:SS`
///
/// Non-finite or negative input renders as `00:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Position as a percentage of duration, 0 while duration is unknown
pub fn progress_percentage(current_time: f64, duration: f64) -> f64 {
    if duration > 0.0 && duration.is_finite() {
        current_time / duration * 100.0
    } else {
        0.0
    }
}
