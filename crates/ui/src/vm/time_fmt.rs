/// Formats a number of seconds as `m:ss` for the countdown label.
#[must_use]
pub fn format_seconds(total: u32) -> String {
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{minutes}:{seconds:02}")
}
