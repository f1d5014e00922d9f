//! Duration and millisecond formatting.

/// Fixed-point milliseconds with exactly three fractional digits, unit
/// suffixed.
///
/// This is the format used by the timer's `leave` report line; rounding is
/// the standard formatter's round-to-nearest.
pub fn format_ms(ms: f64) -> String {
    format!("{:.3}ms", ms)
}

/// Human-scale duration with an adaptive unit.
pub fn format_duration(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.1}ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2}µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2}ms", ns / 1_000_000.0)
    } else {
        format!("{:.2}s", ns / 1_000_000_000.0)
    }
}
