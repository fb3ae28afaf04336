//! Duration display formatting
//!
//! Renders whole seconds as zero-padded `HH:MM:SS`, the format used for both
//! episode durations and the elapsed-time readout of the player.

/// Display string used when there is no episode to show a duration for
pub const EMPTY_DURATION_DISPLAY: &str = "00:00:00";

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Format seconds as `HH:MM:SS`
///
/// Every unit is padded to two digits. Hours are not wrapped into days, so
/// durations of 100 hours or more simply grow the hour field.
///
/// # Examples
///
/// ```
/// use podcastr_core::format_duration;
///
/// assert_eq!(format_duration(59), "00:00:59");
/// assert_eq!(format_duration(3600), "01:00:00");
/// assert_eq!(format_duration(3981), "01:06:21");
/// ```
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / SECONDS_PER_HOUR;
    let minutes = (total_secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_secs % SECONDS_PER_MINUTE;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
