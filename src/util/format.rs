use chrono::Duration;

/// Formats a remaining duration as days, hours and minutes, e.g. `2d 3h 15m`.
///
/// Zero-valued leading units are omitted. Anything under a minute is shown as
/// `less than a minute`.
pub fn format_remaining(remaining: Duration) -> String {
    let total_minutes = remaining.num_minutes();
    if total_minutes < 1 {
        return "less than a minute".to_string();
    }

    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
