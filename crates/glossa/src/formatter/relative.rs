//! Multi-unit relative time, e.g. "in 2 years, in 9 seconds".

use serde::{Deserialize, Serialize};

/// A calendar unit with a fixed length in seconds.
///
/// Months are 30 days and years 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeTimeUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl RelativeTimeUnit {
    /// Length of one unit in seconds.
    pub fn seconds(self) -> u64 {
        match self {
            RelativeTimeUnit::Year => 31_536_000,
            RelativeTimeUnit::Month => 2_592_000,
            RelativeTimeUnit::Week => 604_800,
            RelativeTimeUnit::Day => 86_400,
            RelativeTimeUnit::Hour => 3_600,
            RelativeTimeUnit::Minute => 60,
            RelativeTimeUnit::Second => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelativeTimeUnit::Year => "year",
            RelativeTimeUnit::Month => "month",
            RelativeTimeUnit::Week => "week",
            RelativeTimeUnit::Day => "day",
            RelativeTimeUnit::Hour => "hour",
            RelativeTimeUnit::Minute => "minute",
            RelativeTimeUnit::Second => "second",
        }
    }
}

/// Units used when none are given. Minutes are not among them, so leftover
/// minutes are spoken as seconds.
pub const DEFAULT_RELATIVE_TIME_UNITS: [RelativeTimeUnit; 6] = [
    RelativeTimeUnit::Year,
    RelativeTimeUnit::Month,
    RelativeTimeUnit::Week,
    RelativeTimeUnit::Day,
    RelativeTimeUnit::Hour,
    RelativeTimeUnit::Second,
];

/// Split a signed number of seconds into per-unit counts.
///
/// Units are taken greedily in the order given. Units with a zero count are
/// skipped. Every count carries the sign of `seconds`.
///
/// # Example
///
/// ```
/// use glossa::formatter::{DEFAULT_RELATIVE_TIME_UNITS, RelativeTimeUnit, relative_time_sections};
///
/// let sections = relative_time_sections(-63_072_009, &DEFAULT_RELATIVE_TIME_UNITS);
/// assert_eq!(sections, vec![(-2, RelativeTimeUnit::Year), (-9, RelativeTimeUnit::Second)]);
/// ```
pub fn relative_time_sections(
    seconds: i64,
    units: &[RelativeTimeUnit],
) -> Vec<(i64, RelativeTimeUnit)> {
    let negative = seconds < 0;
    let mut remaining = seconds.unsigned_abs();
    let mut sections = Vec::new();
    for &unit in units {
        let count = remaining.div_euclid(unit.seconds());
        if count != 0 {
            sections.push((signed(count, negative), unit));
            remaining -= count * unit.seconds();
        }
    }
    sections
}

fn signed(count: u64, negative: bool) -> i64 {
    if negative {
        0_i64.checked_sub_unsigned(count).unwrap_or(i64::MIN)
    } else {
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

/// Format each section with `format` and join them with `", "`.
///
/// `units` defaults to [`DEFAULT_RELATIVE_TIME_UNITS`]. Zero seconds gives an
/// empty string.
///
/// # Example
///
/// ```
/// use glossa::formatter::{english_relative_time, format_relative_time_sections};
///
/// let text = format_relative_time_sections(63_072_009, None, english_relative_time);
/// assert_eq!(text, "in 2 years, in 9 seconds");
/// ```
pub fn format_relative_time_sections(
    seconds: i64,
    units: Option<&[RelativeTimeUnit]>,
    mut format: impl FnMut(i64, RelativeTimeUnit) -> String,
) -> String {
    relative_time_sections(seconds, units.unwrap_or(&DEFAULT_RELATIVE_TIME_UNITS))
        .into_iter()
        .map(|(count, unit)| format(count, unit))
        .collect::<Vec<_>>()
        .join(", ")
}

/// English phrasing for one section: "in 3 days", "1 hour ago".
///
/// Zero reads as future, "in 0 seconds".
pub fn english_relative_time(value: i64, unit: RelativeTimeUnit) -> String {
    let count = value.unsigned_abs();
    let plural = if count == 1 { "" } else { "s" };
    if value < 0 {
        format!("{count} {}{plural} ago", unit.as_str())
    } else {
        format!("in {count} {}{plural}", unit.as_str())
    }
}
