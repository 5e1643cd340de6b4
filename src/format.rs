//! Human-readable labels for hours and weekdays.

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Full weekday name for a Monday-based index.
pub fn day_name(day: u8) -> Option<&'static str> {
    DAY_NAMES.get(day as usize).copied()
}

/// Formats a fractional hour as a 12-hour clock label.
///
/// Whole hours omit the minutes (`"9 AM"`); others show them (`"9:30 AM"`).
/// Minutes that round up to 60 carry into the next hour.
///
/// ```
/// use u_timetable::format::format_hour;
///
/// assert_eq!(format_hour(9.5), "9:30 AM");
/// assert_eq!(format_hour(13.0), "1 PM");
/// assert_eq!(format_hour(0.0), "12 AM");
/// ```
pub fn format_hour(hour: f64) -> String {
    let mut h = hour.floor() as i64;
    let mut m = ((hour - hour.floor()) * 60.0).round() as i64;
    if m == 60 {
        h += 1;
        m = 0;
    }
    let h = h.rem_euclid(24);

    let suffix = if h >= 12 { "PM" } else { "AM" };
    let display = match h {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };

    if m == 0 {
        format!("{display} {suffix}")
    } else {
        format!("{display}:{m:02} {suffix}")
    }
}
