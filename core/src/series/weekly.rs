use crate::numeric::round_to;
use crate::records::DayAggregate;
use crate::series::label::Weekday;
use serde::{Deserialize, Serialize};

/// One sample on the continuous 168-hour weekly axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub hour: f64,
    pub volume: f64,
    pub upper_ci: f64,
    pub lower_ci: f64,
    pub day: Weekday,
}

/// Flattens per-day aggregates into one day-major weekly sequence.
///
/// `hour` is the in-day sample offset plus `24 * day_index`, rounded to 3
/// decimals; volume and both confidence bounds round to whole vehicles.
/// Output order follows input order, which keeps the hour axis monotonic
/// when each day's `mean_x` is sorted. Fewer than seven days render as-is;
/// nothing is padded or backfilled. Ragged companion sequences coerce the
/// missing samples to zero, matching the observed-series policy.
pub fn build_weekly_series(days: &[DayAggregate]) -> Vec<WeeklyPoint> {
    let mut series = Vec::new();
    for (day_index, day) in days.iter().enumerate() {
        for (i, &mean_x) in day.mean_x.iter().enumerate() {
            let hour = round_to(mean_x + 24.0 * day_index as f64, 3);
            series.push(WeeklyPoint {
                hour,
                volume: round_to(day.mean_y.get(i).copied().unwrap_or(0.0), 0),
                upper_ci: round_to(day.ci_upper.get(i).copied().unwrap_or(0.0), 0),
                lower_ci: round_to(day.ci_lower.get(i).copied().unwrap_or(0.0), 0),
                day: Weekday::of_global_hour(hour),
            });
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(samples: &[(f64, f64)]) -> DayAggregate {
        DayAggregate {
            mean_x: samples.iter().map(|s| s.0).collect(),
            mean_y: samples.iter().map(|s| s.1).collect(),
            ci_upper: samples.iter().map(|s| s.1 + 10.0).collect(),
            ci_lower: samples.iter().map(|s| s.1 - 10.0).collect(),
        }
    }

    fn full_week() -> Vec<DayAggregate> {
        (0..7)
            .map(|_| aggregate(&[(0.0, 50.2), (6.0, 120.7), (12.0, 95.4), (18.0, 140.9)]))
            .collect()
    }

    #[test]
    fn seven_days_of_four_samples_yield_28_points() {
        let series = build_weekly_series(&full_week());
        assert_eq!(series.len(), 28);
    }

    #[test]
    fn hours_are_monotonic_across_day_boundaries() {
        let series = build_weekly_series(&full_week());
        for pair in series.windows(2) {
            assert!(pair[0].hour <= pair[1].hour);
        }
        assert_eq!(series[0].hour, 0.0);
        assert_eq!(series[27].hour, 6.0 * 24.0 + 18.0);
    }

    #[test]
    fn volume_and_bounds_round_to_whole_vehicles() {
        let series = build_weekly_series(&full_week());
        assert_eq!(series[0].volume, 50.0);
        assert_eq!(series[1].volume, 121.0);
        assert_eq!(series[1].upper_ci, 131.0);
        assert_eq!(series[1].lower_ci, 111.0);
    }

    #[test]
    fn day_follows_the_global_hour() {
        let series = build_weekly_series(&full_week());
        assert_eq!(series[0].day, Weekday::Mon);
        assert_eq!(series[4].day, Weekday::Tue);
        assert_eq!(series[27].day, Weekday::Sun);
    }

    #[test]
    fn short_week_is_rendered_without_padding() {
        let days: Vec<DayAggregate> = full_week().into_iter().take(2).collect();
        let series = build_weekly_series(&days);
        assert_eq!(series.len(), 8);
        assert!(series.iter().all(|p| p.hour < 48.0));
    }

    #[test]
    fn fractional_sample_hours_round_to_three_decimals() {
        let days = vec![aggregate(&[(7.33333, 80.0)])];
        let series = build_weekly_series(&days);
        assert_eq!(series[0].hour, 7.333);
    }
}
