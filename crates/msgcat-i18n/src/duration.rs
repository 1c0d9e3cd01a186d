//! Millisecond durations rendered as localized text.
//!
//! Durations are split into whole days, hours, minutes and seconds by
//! truncating division. Units finer than the requested granularity and units
//! with a zero magnitude are left out, so `90_000` ms reads `1 minute 30
//! seconds` at second granularity and `1 minute` at minute granularity.
//! When nothing remains the result is `less than 1 <unit>`.

use crate::error::{I18nError, I18nResult};
use msgcat_common::TimeUnit;

/// Unit names used when formatting durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLabels {
    /// Singular day.
    pub day: String,
    /// Plural day.
    pub day_plural: String,
    /// Singular hour.
    pub hour: String,
    /// Plural hour.
    pub hour_plural: String,
    /// Singular minute.
    pub minute: String,
    /// Plural minute.
    pub minute_plural: String,
    /// Singular second.
    pub second: String,
    /// Plural second.
    pub second_plural: String,
    /// Prefix for durations below the granularity, e.g. `less than`.
    pub less_than: String,
    /// Text shown for durations without a limit.
    pub unlimited: String,
}

impl Default for TimeLabels {
    fn default() -> Self {
        Self {
            day: "day".to_string(),
            day_plural: "days".to_string(),
            hour: "hour".to_string(),
            hour_plural: "hours".to_string(),
            minute: "minute".to_string(),
            minute_plural: "minutes".to_string(),
            second: "second".to_string(),
            second_plural: "seconds".to_string(),
            less_than: "less than".to_string(),
            unlimited: "unlimited".to_string(),
        }
    }
}

impl TimeLabels {
    /// Label for `count` of `unit`; singular only when `count == 1`.
    #[must_use]
    pub fn label(&self, unit: TimeUnit, count: i64) -> &str {
        let singular = count == 1;
        match (unit, singular) {
            (TimeUnit::Days, true) => &self.day,
            (TimeUnit::Days, false) => &self.day_plural,
            (TimeUnit::Hours, true) => &self.hour,
            (TimeUnit::Hours, false) => &self.hour_plural,
            (TimeUnit::Minutes, true) => &self.minute,
            (TimeUnit::Minutes, false) => &self.minute_plural,
            (TimeUnit::Seconds, true) => &self.second,
            (TimeUnit::Seconds, false) => &self.second_plural,
        }
    }
}

/// Formats durations with a fixed set of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationFormatter {
    labels: TimeLabels,
}

impl DurationFormatter {
    /// Creates a formatter using `labels`.
    #[must_use]
    pub const fn new(labels: TimeLabels) -> Self {
        Self { labels }
    }

    /// The labels in use.
    #[must_use]
    pub const fn labels(&self) -> &TimeLabels {
        &self.labels
    }

    /// Formats `millis` down to `granularity`.
    ///
    /// # Errors
    ///
    /// [`I18nError::InvalidArgument`] when `millis` is negative.
    pub fn format(&self, millis: i64, granularity: TimeUnit) -> I18nResult<String> {
        if millis < 0 {
            return Err(I18nError::InvalidArgument(format!(
                "duration must not be negative, got {millis} ms"
            )));
        }

        let mut remaining = millis;
        let mut segments = Vec::with_capacity(TimeUnit::ALL.len());
        for unit in TimeUnit::ALL {
            let magnitude = remaining / unit.millis();
            remaining %= unit.millis();
            if magnitude > 0 && unit.is_at_least(granularity) {
                segments.push(format!("{magnitude} {}", self.labels.label(unit, magnitude)));
            }
        }

        if segments.is_empty() {
            return Ok(format!(
                "{} 1 {}",
                self.labels.less_than,
                self.labels.label(granularity, 1)
            ));
        }

        Ok(segments.join(" "))
    }

    /// Formats `millis` down to the unit named `granularity` (`"minutes"`, `"h"`, ...).
    ///
    /// # Errors
    ///
    /// [`I18nError::InvalidArgument`] for a negative duration or an
    /// unrecognized unit name.
    pub fn format_named(&self, millis: i64, granularity: &str) -> I18nResult<String> {
        let unit: TimeUnit = granularity.parse()?;
        self.format(millis, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn english() -> DurationFormatter {
        DurationFormatter::default()
    }

    #[test]
    fn test_zero_is_less_than_one_second() {
        assert_eq!(english().format(0, TimeUnit::Seconds).unwrap(), "less than 1 second");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(english().format(90_000, TimeUnit::Seconds).unwrap(), "1 minute 30 seconds");
    }

    #[test]
    fn test_finer_units_are_dropped() {
        assert_eq!(english().format(90_000, TimeUnit::Minutes).unwrap(), "1 minute");
        assert_eq!(english().format(86_430_000, TimeUnit::Hours).unwrap(), "1 day");
    }

    #[test]
    fn test_zero_segments_are_skipped() {
        let millis = 2 * 86_400_000 + 5 * 1_000;
        assert_eq!(english().format(millis, TimeUnit::Seconds).unwrap(), "2 days 5 seconds");
    }

    #[test]
    fn test_below_granularity() {
        assert_eq!(english().format(59_999, TimeUnit::Minutes).unwrap(), "less than 1 minute");
        assert_eq!(english().format(999, TimeUnit::Seconds).unwrap(), "less than 1 second");
        assert_eq!(
            english().format(3 * 3_600_000, TimeUnit::Days).unwrap(),
            "less than 1 day"
        );
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        assert_eq!(english().format(1_999, TimeUnit::Seconds).unwrap(), "1 second");
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let err = english().format(-1, TimeUnit::Seconds).unwrap_err();
        assert!(matches!(err, I18nError::InvalidArgument(_)));
    }

    #[test]
    fn test_unknown_unit_name_is_rejected() {
        assert_eq!(english().format_named(90_000, "minutes").unwrap(), "1 minute");
        let err = english().format_named(90_000, "fortnights").unwrap_err();
        assert!(matches!(err, I18nError::InvalidArgument(_)));
    }

    #[test]
    fn test_custom_labels() {
        let labels = TimeLabels {
            minute: "minute".to_string(),
            second_plural: "secondes".to_string(),
            less_than: "moins de".to_string(),
            second: "seconde".to_string(),
            ..TimeLabels::default()
        };
        let formatter = DurationFormatter::new(labels);
        assert_eq!(formatter.format(90_000, TimeUnit::Seconds).unwrap(), "1 minute 30 secondes");
        assert_eq!(formatter.format(10, TimeUnit::Seconds).unwrap(), "moins de 1 seconde");
    }

    fn any_unit() -> impl Strategy<Value = TimeUnit> {
        prop::sample::select(TimeUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_total_over_non_negative(millis in 0i64..=i64::MAX, unit in any_unit()) {
            let text = english().format(millis, unit).unwrap();
            prop_assert!(!text.is_empty());
        }

        #[test]
        fn prop_less_than_exactly_below_granularity(
            millis in 0i64..10 * 86_400_000,
            unit in any_unit(),
        ) {
            let text = english().format(millis, unit).unwrap();
            prop_assert_eq!(text.starts_with("less than"), millis < unit.millis());
        }

        #[test]
        fn prop_segments_never_finer_than_granularity(millis in 0i64..10 * 86_400_000) {
            let text = english().format(millis, TimeUnit::Hours).unwrap();
            prop_assert!(!text.contains("minute"));
            prop_assert!(!text.contains("second"));
        }
    }
}
