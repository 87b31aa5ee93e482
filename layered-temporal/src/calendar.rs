//! Calendar arithmetic.
//!
//! [`CalendarDelta`] is a calendar-aware offset: year and month components
//! are applied first and clamp to the end of a shorter month (31 January
//! plus one month is 28 or 29 February), then the fixed-length day, hour and
//! minute components are added.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::convert::TryFrom;
use std::fmt;

use crate::lexicon;

/// A unit of time named in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CalendarUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    pub fn from_lemma(lemma: &str) -> Option<Self> {
        match lemma {
            "год" | "лет" | "г" | "г." | "л" => Some(CalendarUnit::Year),
            "месяц" | "мес" => Some(CalendarUnit::Month),
            "неделя" => Some(CalendarUnit::Week),
            "день" | "сутки" => Some(CalendarUnit::Day),
            "час" | "ч" => Some(CalendarUnit::Hour),
            "минута" | "мин" | "мина" => Some(CalendarUnit::Minute),
            _ => None,
        }
    }

    /// One of this unit.
    pub fn delta(self) -> CalendarDelta {
        self.times(1)
    }

    /// `n` of this unit.
    pub fn times(self, n: i64) -> CalendarDelta {
        match self {
            CalendarUnit::Minute => CalendarDelta::minutes(n),
            CalendarUnit::Hour => CalendarDelta::hours(n),
            CalendarUnit::Day => CalendarDelta::days(n),
            CalendarUnit::Week => CalendarDelta::days(n.saturating_mul(7)),
            CalendarUnit::Month => CalendarDelta::months(n),
            CalendarUnit::Year => CalendarDelta::years(n),
        }
    }

    /// A fractional amount, with the remainder carried into the next finer
    /// calendar unit: 1.5 years is 1 year 6 months, 1.5 months is 1 month
    /// 15 days.
    pub fn fractional(self, amount: f64) -> CalendarDelta {
        let whole = amount.trunc() as i64;
        let fraction = amount.fract();
        let rest = match self {
            CalendarUnit::Year => CalendarDelta::months((fraction * 12.0).round() as i64),
            CalendarUnit::Month => CalendarDelta::days((fraction * 30.0).round() as i64),
            CalendarUnit::Week => CalendarDelta::days((fraction * 7.0).round() as i64),
            CalendarUnit::Day => CalendarDelta::hours((fraction * 24.0).round() as i64),
            CalendarUnit::Hour => CalendarDelta::minutes((fraction * 60.0).round() as i64),
            CalendarUnit::Minute => CalendarDelta::ZERO,
        };
        self.times(whole) + rest
    }
}

/// Wider than chrono's whole date range, small enough for `Duration::minutes`.
const MAX_OFFSET_MINUTES: u64 = 600_000 * 366 * 24 * 60;

/// Calendar-aware offset with relative-delta semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl CalendarDelta {
    pub const ZERO: CalendarDelta = CalendarDelta {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
    };
    pub const HOUR: CalendarDelta = CalendarDelta::hours(1);
    pub const DAY: CalendarDelta = CalendarDelta::days(1);
    pub const WEEK: CalendarDelta = CalendarDelta::days(7);
    pub const MONTH: CalendarDelta = CalendarDelta::months(1);
    pub const HALF_YEAR: CalendarDelta = CalendarDelta::months(6);
    pub const YEAR: CalendarDelta = CalendarDelta::years(1);

    pub const fn years(years: i64) -> Self {
        CalendarDelta {
            years,
            ..CalendarDelta::ZERO
        }
    }

    pub const fn months(months: i64) -> Self {
        CalendarDelta {
            months,
            ..CalendarDelta::ZERO
        }
    }

    pub const fn days(days: i64) -> Self {
        CalendarDelta {
            days,
            ..CalendarDelta::ZERO
        }
    }

    pub const fn hours(hours: i64) -> Self {
        CalendarDelta {
            hours,
            ..CalendarDelta::ZERO
        }
    }

    pub const fn minutes(minutes: i64) -> Self {
        CalendarDelta {
            minutes,
            ..CalendarDelta::ZERO
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == CalendarDelta::ZERO
    }

    /// Every component multiplied by `factor`.
    pub fn scaled(self, factor: i64) -> Self {
        CalendarDelta {
            years: self.years.saturating_mul(factor),
            months: self.months.saturating_mul(factor),
            days: self.days.saturating_mul(factor),
            hours: self.hours.saturating_mul(factor),
            minutes: self.minutes.saturating_mul(factor),
        }
    }

    pub fn negated(self) -> Self {
        self.scaled(-1)
    }

    /// `at + self`, or `None` when the result leaves chrono's range.
    pub fn add_to(self, at: NaiveDateTime) -> Option<NaiveDateTime> {
        let total_months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let magnitude = u32::try_from(total_months.unsigned_abs()).ok()?;
        let shifted = if total_months >= 0 {
            at.checked_add_months(Months::new(magnitude))?
        } else {
            at.checked_sub_months(Months::new(magnitude))?
        };

        let minutes = self
            .days
            .checked_mul(24 * 60)?
            .checked_add(self.hours.checked_mul(60)?)?
            .checked_add(self.minutes)?;
        if minutes.unsigned_abs() > MAX_OFFSET_MINUTES {
            return None;
        }
        shifted.checked_add_signed(Duration::minutes(minutes))
    }

    /// `at - self`.
    pub fn sub_from(self, at: NaiveDateTime) -> Option<NaiveDateTime> {
        self.negated().add_to(at)
    }
}

impl std::ops::Add for CalendarDelta {
    type Output = CalendarDelta;

    fn add(self, other: CalendarDelta) -> CalendarDelta {
        CalendarDelta {
            years: self.years.saturating_add(other.years),
            months: self.months.saturating_add(other.months),
            days: self.days.saturating_add(other.days),
            hours: self.hours.saturating_add(other.hours),
            minutes: self.minutes.saturating_add(other.minutes),
        }
    }
}

impl fmt::Display for CalendarDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let parts = [
            (self.years, "y"),
            (self.months, "mo"),
            (self.days, "d"),
            (self.hours, "h"),
            (self.minutes, "min"),
        ];
        let mut first = true;
        for (amount, suffix) in parts.iter().filter(|(amount, _)| *amount != 0) {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", amount, suffix)?;
            first = false;
        }
        Ok(())
    }
}

/// Four-digit year for a two-digit one, pivoting like `%y`: 00–68 are
/// 2000–2068, 69–99 are 1969–1999.
pub fn expand_two_digit_year(year: u32) -> i32 {
    if year < 69 {
        2000 + year as i32
    } else if year < 100 {
        1900 + year as i32
    } else {
        year as i32
    }
}

/// A year as written: two digits pivot, anything longer is taken as is.
pub fn full_year(year: u32) -> i32 {
    if year < 100 {
        expand_two_digit_year(year)
    } else {
        year as i32
    }
}

/// Midnight of a calendar day, if the day exists.
pub fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}

/// A clock reading on a calendar day.
pub fn at_time(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, minute, 0)
}

/// The runs of ASCII digits in `text`, as numbers.
///
/// Dotted dates, clock readings and ranges all reduce to their numbers:
/// `"24.12.2010"` is `[24, 12, 2010]`, `"17-00"` is `[17, 0]`.
pub fn numbers_in(text: &str) -> Vec<u32> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse().ok())
        .collect()
}

/// A `(month, day)` pair from the lexicon turned into a date in `year`.
pub fn anchored(year: i32, anchor: (u32, u32)) -> Option<NaiveDateTime> {
    midnight(year, anchor.0, anchor.1)
}

/// The 15th of the named month: month-level expressions point mid-month.
pub fn mid_month(year: i32, month_lemma: &str) -> Option<NaiveDateTime> {
    midnight(year, lexicon::month_number(month_lemma)?, 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        midnight(y, m, d).unwrap()
    }

    #[test]
    fn months_clamp_to_month_end() {
        assert_eq!(CalendarDelta::MONTH.add_to(dt(2021, 1, 31)), Some(dt(2021, 2, 28)));
        assert_eq!(CalendarDelta::YEAR.sub_from(dt(2020, 2, 29)), Some(dt(2019, 2, 28)));
    }

    #[test]
    fn months_apply_before_days() {
        let delta = CalendarDelta::months(1) + CalendarDelta::days(15);
        assert_eq!(delta.sub_from(dt(2020, 3, 31)), Some(dt(2020, 2, 14)));
    }

    #[test]
    fn fractional_units() {
        assert_eq!(
            CalendarUnit::Year.fractional(1.5),
            CalendarDelta::years(1) + CalendarDelta::months(6)
        );
        assert_eq!(
            CalendarUnit::Month.fractional(2.5),
            CalendarDelta::months(2) + CalendarDelta::days(15)
        );
        assert_eq!(CalendarUnit::Week.fractional(1.5), CalendarDelta::days(11));
    }

    #[test]
    fn two_digit_years() {
        assert_eq!(expand_two_digit_year(10), 2010);
        assert_eq!(expand_two_digit_year(68), 2068);
        assert_eq!(expand_two_digit_year(69), 1969);
        assert_eq!(expand_two_digit_year(97), 1997);
    }

    #[test]
    fn numbers() {
        assert_eq!(numbers_in("24.12.2010"), vec![24, 12, 2010]);
        assert_eq!(numbers_in("17-00"), vec![17, 0]);
        assert_eq!(numbers_in("1–10"), vec![1, 10]);
        assert!(numbers_in("г.").is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(CalendarDelta::ZERO.to_string(), "0");
        assert_eq!(CalendarDelta::days(45).to_string(), "45d");
        assert_eq!(
            (CalendarDelta::years(1) + CalendarDelta::months(6)).to_string(),
            "1y 6mo"
        );
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(CalendarDelta::years(300_000).add_to(dt(2020, 1, 1)), None);
        assert_eq!(CalendarUnit::Day.fractional(1e12).sub_from(dt(2020, 1, 1)), None);
        assert_eq!(CalendarUnit::Week.times(i64::MAX).sub_from(dt(2020, 1, 1)), None);
        assert_eq!(CalendarDelta::minutes(i64::MIN).add_to(dt(2020, 1, 1)), None);
        assert_eq!(
            (CalendarDelta::hours(i64::MAX) + CalendarDelta::hours(1)).add_to(dt(2020, 1, 1)),
            None
        );
    }
}
