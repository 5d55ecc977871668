//! Calendar-aligned reporting periods.
//!
//! Ranges are computed on the local calendar date of the supplied `now` and
//! carry **inclusive** bounds: the end is one second before the next boundary.
//! Range queries must therefore compare with `>= start` and `<= end`.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A named reporting period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    Today,
    Week,
    #[default]
    Month,
    Year,
}

/// A resolved date range with inclusive bounds and a display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: &'static str,
}

impl PeriodRange {
    /// Whether `at` falls inside the range (both bounds inclusive).
    #[must_use]
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at <= self.end
    }
}

impl Period {
    /// Parses a period token, case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Period> {
        match token.trim().to_ascii_lowercase().as_str() {
            "today" => Some(Period::Today),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Resolves the range covering `now`.
    #[must_use]
    pub fn resolve(self, now: NaiveDateTime) -> PeriodRange {
        let date = now.date();
        match self {
            Period::Today => {
                let start = midnight(date);
                PeriodRange {
                    start,
                    end: start + Duration::days(1) - Duration::seconds(1),
                    label: "Today",
                }
            }
            Period::Week => {
                let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
                let start = midnight(monday);
                PeriodRange {
                    start,
                    end: start + Duration::days(7) - Duration::seconds(1),
                    label: "This Week",
                }
            }
            Period::Month => {
                let first = date.with_day(1).unwrap_or(date);
                let (next_year, next_month) = if date.month() == 12 {
                    (date.year() + 1, 1)
                } else {
                    (date.year(), date.month() + 1)
                };
                let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap_or(first);
                PeriodRange {
                    start: midnight(first),
                    end: midnight(next) - Duration::seconds(1),
                    label: "This Month",
                }
            }
            Period::Year => {
                let first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
                let next = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap_or(first);
                PeriodRange {
                    start: midnight(first),
                    end: midnight(next) - Duration::seconds(1),
                    label: "This Year",
                }
            }
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn today_spans_the_calendar_day() {
        let range = Period::Today.resolve(at(2026, 8, 7, 15, 30, 0));
        assert_eq!(range.start, at(2026, 8, 7, 0, 0, 0));
        assert_eq!(range.end, at(2026, 8, 7, 23, 59, 59));
        assert_eq!(range.label, "Today");
    }

    #[test]
    fn week_starts_on_the_preceding_monday() {
        // 2026-08-07 is a Friday.
        let range = Period::Week.resolve(at(2026, 8, 7, 9, 0, 0));
        assert_eq!(range.start, at(2026, 8, 3, 0, 0, 0));
        assert_eq!(range.end, at(2026, 8, 9, 23, 59, 59));
    }

    #[test]
    fn week_on_a_monday_starts_that_day() {
        let range = Period::Week.resolve(at(2026, 8, 3, 0, 0, 0));
        assert_eq!(range.start, at(2026, 8, 3, 0, 0, 0));
    }

    #[test]
    fn month_ends_on_the_last_instant_of_the_month() {
        let range = Period::Month.resolve(at(2026, 2, 14, 12, 0, 0));
        assert_eq!(range.start, at(2026, 2, 1, 0, 0, 0));
        assert_eq!(range.end, at(2026, 2, 28, 23, 59, 59));
    }

    #[test]
    fn december_rolls_into_the_next_year() {
        let range = Period::Month.resolve(at(2026, 12, 25, 8, 0, 0));
        assert_eq!(range.start, at(2026, 12, 1, 0, 0, 0));
        assert_eq!(range.end, at(2026, 12, 31, 23, 59, 59));
    }

    #[test]
    fn year_covers_january_through_december() {
        let range = Period::Year.resolve(at(2026, 6, 1, 0, 0, 0));
        assert_eq!(range.start, at(2026, 1, 1, 0, 0, 0));
        assert_eq!(range.end, at(2026, 12, 31, 23, 59, 59));
    }

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let range = Period::Month.resolve(at(2026, 12, 10, 0, 0, 0));
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
        assert!(!range.contains(at(2027, 1, 1, 0, 0, 0)));
        assert!(!range.contains(at(2026, 11, 30, 23, 59, 59)));
    }
}
