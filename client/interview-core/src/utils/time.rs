/// Threshold below which the countdown is rendered in its urgent state.
pub const LOW_TIME_THRESHOLD_SECONDS: u32 = 5 * 60;

/// Formats a seconds budget as `MM:SS` for the countdown display.
pub fn format_clock(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

pub fn is_urgent(remaining_seconds: u32) -> bool {
    remaining_seconds < LOW_TIME_THRESHOLD_SECONDS
}
