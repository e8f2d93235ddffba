//! Canonical wire formatting for query-string values.

use std::time::Duration;

/// Time units accepted by the server, largest first, in nanoseconds.
const TIME_UNITS: [(u128, &str); 7] = [
    (86_400_000_000_000, "d"),
    (3_600_000_000_000, "h"),
    (60_000_000_000, "m"),
    (1_000_000_000, "s"),
    (1_000_000, "ms"),
    (1_000, "micros"),
    (1, "nanos"),
];

/// Formats a boolean as `"true"` or `"false"`.
pub fn format_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Joins list values with commas, keeping call order.
///
/// ```rust
/// use typedapi::params::join_list;
///
/// assert_eq!(join_list(["open", "hidden"]), "open,hidden");
/// ```
pub fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for item in items {
        if !joined.is_empty() {
            joined.push(',');
        }
        joined.push_str(item.as_ref());
    }
    joined
}

/// Formats a duration using the largest time unit that represents it exactly.
///
/// ```rust
/// use std::time::Duration;
/// use typedapi::params::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(30)), "30s");
/// assert_eq!(format_duration(Duration::from_secs(120)), "2m");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1500ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    TIME_UNITS
        .iter()
        .find(|(size, _)| nanos % size == 0)
        .map(|(size, unit)| format!("{}{unit}", nanos / size))
        .unwrap_or_else(|| format!("{nanos}nanos"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_literals() {
        assert_eq!(format_bool(true), "true");
        assert_eq!(format_bool(false), "false");
    }

    #[test]
    fn list_keeps_call_order() {
        assert_eq!(join_list(["closed", "open", "all"]), "closed,open,all");
        assert_eq!(join_list(vec!["only".to_string()]), "only");
        assert_eq!(join_list(Vec::<String>::new()), "");
    }

    #[test]
    fn duration_picks_largest_exact_unit() {
        assert_eq!(format_duration(Duration::from_secs(86_400 * 2)), "2d");
        assert_eq!(format_duration(Duration::from_secs(3_600)), "1h");
        assert_eq!(format_duration(Duration::from_secs(90)), "90s");
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_micros(7)), "7micros");
        assert_eq!(format_duration(Duration::from_nanos(3)), "3nanos");
    }

    #[test]
    fn zero_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }
}
