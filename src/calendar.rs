//! Calendar conversion between civil dates and elapsed simulation days.
//!
//! Uses exact Julian Day arithmetic on the proleptic Gregorian calendar:
//! Fliegel–Van Flandern for date → JDN and the Meeus inversion for JD → date.
//! Month lengths and leap years fall out of the arithmetic.
//!
//! Dates are not validated. A non-existent day such as 2025-02-30 is
//! carried through the arithmetic and lands on a nearby real date; the
//! result is unspecified but never panics.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Julian Day magnitude beyond which inputs are clamped before inversion.
const MAX_JULIAN_DAY: i64 = 1_000_000_000_000;

/// A civil (Gregorian) calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Error parsing a [`CalendarDate`] from text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateParseError {
    #[error("expected YYYY-MM-DD or YYYY MM DD, got {0:?}")]
    Shape(String),
    #[error("invalid {field} {value:?}")]
    Field { field: &'static str, value: String },
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Julian Day Number (the Julian Day at noon) of this date.
    pub fn julian_day_number(&self) -> i64 {
        let year = i64::from(self.year);
        let month = i64::from(self.month);
        let day = i64::from(self.day);

        let a = (14 - month) / 12;
        let y = year + 4800 - a;
        let m = month + 12 * a - 3;

        day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    /// Civil date containing Julian Day `jd`.
    ///
    /// The day boundary follows Julian Day rounding: `z = floor(jd + 0.5)`.
    /// Non-finite input saturates instead of panicking.
    pub fn from_julian_day(jd: f64) -> Self {
        let z = (jd + 0.5).floor() as i64;
        Self::from_julian_day_number(z)
    }

    /// Civil date for an integral Julian Day Number.
    ///
    /// Exact for dates from 0400-03-01 onwards.
    pub fn from_julian_day_number(z: i64) -> Self {
        let z = z.clamp(-MAX_JULIAN_DAY, MAX_JULIAN_DAY);
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        let a = z + 1 + alpha - alpha / 4;
        let b = a + 1524;
        let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
        let d = (365.25 * c as f64).floor() as i64;
        let e = ((b - d) as f64 / 30.6001).floor() as i64;

        let day = b - d - (30.6001 * e as f64).floor() as i64;
        let month = if e < 14 { e - 1 } else { e - 13 };
        let year = if month > 2 { c - 4716 } else { c - 4715 };

        Self {
            year: year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            month: month.clamp(0, i64::from(u32::MAX)) as u32,
            day: day.clamp(0, i64::from(u32::MAX)) as u32,
        }
    }

    /// The date `days` after this one (fractional days allowed).
    pub fn offset_by_days(&self, days: f64) -> Self {
        Self::from_julian_day(self.julian_day_number() as f64 + days)
    }

    /// Whole days from `self` to `other`.
    #[cfg(test)]
    pub fn days_until(&self, other: &CalendarDate) -> i64 {
        other.julian_day_number() - self.julian_day_number()
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::new(2025, 1, 1)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    /// Accepts `YYYY-MM-DD` or whitespace-separated `YYYY MM DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = if s.contains('-') && !s.starts_with('-') {
            s.split('-').collect()
        } else {
            s.split_whitespace().collect()
        };

        let [year, month, day] = parts.as_slice() else {
            return Err(DateParseError::Shape(s.to_string()));
        };

        Ok(Self {
            year: parse_field("year", year)?,
            month: parse_field("month", month)?,
            day: parse_field("day", day)?,
        })
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, DateParseError> {
    value.trim().parse().map_err(|_| DateParseError::Field {
        field,
        value: value.to_string(),
    })
}

/// Format the date `elapsed_days` after the given start date as `YYYY-MM-DD`.
pub fn date_string(elapsed_days: f64, start_year: i32, start_month: u32, start_day: u32) -> String {
    CalendarDate::new(start_year, start_month, start_day)
        .offset_by_days(elapsed_days)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_date_round_trip() {
        assert_eq!(date_string(0.0, 2025, 1, 1), "2025-01-01");
        assert_eq!(date_string(0.0, 1999, 12, 31), "1999-12-31");
    }

    #[test]
    fn test_one_year_later() {
        assert_eq!(date_string(365.0, 2025, 1, 1), "2026-01-01");
        // 2024 is a leap year
        assert_eq!(date_string(365.0, 2024, 1, 1), "2024-12-31");
        assert_eq!(date_string(366.0, 2024, 1, 1), "2025-01-01");
    }

    #[test]
    fn test_month_lengths_are_exact() {
        assert_eq!(date_string(31.0, 2025, 1, 1), "2025-02-01");
        assert_eq!(date_string(59.0, 2025, 1, 1), "2025-03-01");
        assert_eq!(date_string(1.0, 2024, 2, 28), "2024-02-29");
        assert_eq!(date_string(1.0, 2023, 2, 28), "2023-03-01");
        assert_eq!(date_string(1.0, 2100, 2, 28), "2100-03-01");
        assert_eq!(date_string(1.0, 2000, 2, 28), "2000-02-29");
    }

    #[test]
    fn test_known_julian_day_numbers() {
        assert_eq!(CalendarDate::new(2000, 1, 1).julian_day_number(), 2_451_545);
        assert_eq!(CalendarDate::new(2025, 1, 1).julian_day_number(), 2_460_677);
        assert_eq!(CalendarDate::new(1582, 10, 15).julian_day_number(), 2_299_161);
    }

    #[test]
    fn test_julian_day_round_trip() {
        for date in [
            CalendarDate::new(1950, 3, 16),
            CalendarDate::new(2029, 4, 13),
            CalendarDate::new(2032, 12, 22),
            CalendarDate::new(2182, 9, 24),
        ] {
            let jdn = date.julian_day_number();
            assert_eq!(CalendarDate::from_julian_day_number(jdn), date);
        }
    }

    #[test]
    fn test_fractional_days_roll_over_at_half() {
        // JDN is noon; the civil day changes at jd + 0.5
        assert_eq!(date_string(0.49, 2025, 1, 1), "2025-01-01");
        assert_eq!(date_string(0.5, 2025, 1, 1), "2025-01-02");
        assert_eq!(date_string(1.2, 2025, 1, 1), "2025-01-02");
    }

    #[test]
    fn test_apophis_flyby_date() {
        let start = CalendarDate::new(2025, 1, 1);
        let flyby = CalendarDate::new(2029, 4, 13);
        let days = start.days_until(&flyby);
        assert_eq!(days, 1563);
        assert_eq!(start.offset_by_days(days as f64), flyby);
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(CalendarDate::new(987, 3, 4).to_string(), "0987-03-04");
    }

    #[test]
    fn test_parse_both_forms() {
        assert_eq!("2025-01-01".parse(), Ok(CalendarDate::new(2025, 1, 1)));
        assert_eq!(" 2029 4 13 ".parse(), Ok(CalendarDate::new(2029, 4, 13)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("2025-01".parse::<CalendarDate>(), Err(DateParseError::Shape(_))));
        assert!(matches!(
            "2025-xx-01".parse::<CalendarDate>(),
            Err(DateParseError::Field { field: "month", .. })
        ));
    }

    #[test]
    fn test_invalid_dates_do_not_panic() {
        // Not validated; only required to produce some output
        let _ = date_string(10.0, 2025, 2, 30);
        let _ = date_string(0.0, 2025, 13, 1);
        let _ = date_string(0.0, 2025, 0, 0);
        let _ = date_string(f64::NAN, 2025, 1, 1);
        let _ = date_string(f64::INFINITY, 2025, 1, 1);
        let _ = date_string(-1.0e300, 2025, 1, 1);
    }

    #[test]
    fn test_month_overflow_normalizes() {
        assert_eq!(date_string(0.0, 2025, 2, 30), "2025-03-02");
    }
}
