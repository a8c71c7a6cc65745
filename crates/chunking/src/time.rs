/// Render a millisecond offset as `MM:SS`, flooring sub-second remainder.
pub fn ms_to_clock(ms: i64) -> String {
    seconds_to_clock(ms / 1000)
}

/// Render a whole-second offset as `MM:SS`.
pub fn seconds_to_clock(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    format!("{:02}:{:02}", total / 60, total % 60)
}
