//! Human-readable formatting for byte sizes and elapsed durations.

/// Decimal units stepped through once a value leaves the plain-byte range.
const SIZE_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count as a human-readable magnitude string.
///
/// Values below 1000 are rendered as integer bytes (`"999 B"`); larger
/// values are divided by 1000 per unit step and rendered with exactly two
/// decimals (`"1.00 kB"`, `"1.50 MB"`). Scaling is decimal, never 1024-based.
/// The magnitude is rounded to two decimals *before* the next-unit
/// comparison, so `999_999` rolls over to `"1.00 MB"` rather than printing
/// `"1000.00 kB"`.
pub fn humanize_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;

    while (value.abs() * 100.0).round() / 100.0 >= 1000.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

/// Format an elapsed duration in seconds as a coarse relative-time phrase.
///
/// Only the single largest non-zero unit is reported (`"1 day"`, never
/// `"1 day 3 hours"`); that coarseness is part of the display contract.
/// Durations under five seconds collapse to `"a few seconds"`.
pub fn humanize_duration(seconds: f64) -> String {
    if seconds < 5.0 {
        return "a few seconds".to_string();
    }
    if seconds < 60.0 {
        return format!("{} seconds", seconds.floor() as u64);
    }

    let total_minutes = seconds.floor() as u64 / 60;
    let total_hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    let total_days = total_hours / 24;
    let hours = total_hours % 24;
    let total_months = total_days / 30;
    let days = total_days % 30;
    let years = total_months / 12;
    let months = total_months % 12;

    let ladder = [
        (years, "year"),
        (months, "month"),
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
    ];

    for (count, unit) in ladder {
        if count == 0 {
            continue;
        }
        return if count > 1 {
            format!("{} {}s", count, unit)
        } else {
            format!("{} {}", count, unit)
        };
    }

    "a few seconds".to_string()
}
