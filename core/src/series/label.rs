use serde::{Deserialize, Serialize};

/// Day bucket on the 7x24-hour chart axis, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl Weekday {
    /// Day bucket for a global hour on the `0..168` axis; hours past the
    /// week wrap around.
    pub fn of_global_hour(global_hour: f64) -> Weekday {
        let index = (global_hour / 24.0).floor() as i64;
        DAYS[index.rem_euclid(7) as usize]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

/// Formats a fractional hour as a zero-padded `HH:MM` label.
///
/// Minutes are rounded independently of the hour, so a value just under a
/// whole hour labels as `:60` (`23.999` -> `"23:60"`); the tick labels
/// carry that as-is rather than rolling the hour over.
pub fn format_hour(hour_fraction: f64) -> String {
    let hours = hour_fraction.floor();
    let minutes = ((hour_fraction - hours) * 60.0).round();
    format!("{:02}:{:02}", hours as i64, minutes as i64)
}

/// Tick label combining the day bucket and in-day time, e.g. `Tue 12:30`.
pub fn day_hour_label(global_hour: f64) -> String {
    format!(
        "{} {}",
        Weekday::of_global_hour(global_hour).label(),
        format_hour(global_hour % 24.0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hour_zero_pads_both_fields() {
        assert_eq!(format_hour(6.5), "06:30");
        assert_eq!(format_hour(0.0), "00:00");
        assert_eq!(format_hour(13.25), "13:15");
    }

    #[test]
    fn format_hour_keeps_minute_overflow() {
        assert_eq!(format_hour(23.999), "23:60");
        assert_eq!(format_hour(7.9999), "07:60");
    }

    #[test]
    fn global_hour_maps_to_day_buckets() {
        assert_eq!(Weekday::of_global_hour(0.0), Weekday::Mon);
        assert_eq!(Weekday::of_global_hour(23.99), Weekday::Mon);
        assert_eq!(Weekday::of_global_hour(24.0), Weekday::Tue);
        assert_eq!(Weekday::of_global_hour(167.9), Weekday::Sun);
        assert_eq!(Weekday::of_global_hour(168.0), Weekday::Mon);
    }

    #[test]
    fn day_hour_label_combines_day_and_time() {
        assert_eq!(day_hour_label(36.5), "Tue 12:30");
        assert_eq!(day_hour_label(12.0), "Mon 12:00");
        assert_eq!(day_hour_label(156.0), "Sun 12:00");
    }

    #[test]
    fn weekday_serializes_as_short_label() {
        assert_eq!(serde_json::to_string(&Weekday::Wed).unwrap(), "\"Wed\"");
    }
}
