//! Timezone-free calendar date.
//!
//! This module defines [`LocalDate`], the date type every other part of the
//! ledger works in. A `LocalDate` is a bare (year, month, day) in the
//! institution's local calendar: it has no time of day and no UTC offset, so
//! formatting or comparing it can never shift it across midnight.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clock::Clock;
use crate::error::{LedgerError, LedgerResult};

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A calendar day in institutional local time.
///
/// Values are immutable, totally ordered, and serialize as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use leave_ledger::models::LocalDate;
///
/// let date = LocalDate::from_parts(2025, 7, 21).unwrap();
/// assert_eq!(date.to_iso(), "2025-07-21");
/// assert_eq!(date.day_of_week(), 1); // Monday
/// assert_eq!(LocalDate::parse_iso("2025-07-21").unwrap(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    /// Builds a date from its components.
    ///
    /// Fails with [`LedgerError::InvalidDate`] when the triple is not a real
    /// calendar date (e.g. February 30) or the year is outside `0..=9999`.
    ///
    /// ```
    /// use leave_ledger::models::LocalDate;
    ///
    /// assert!(LocalDate::from_parts(2024, 2, 29).is_ok());
    /// assert!(LocalDate::from_parts(2025, 2, 29).is_err());
    /// ```
    pub fn from_parts(year: i32, month: u32, day: u32) -> LedgerResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(LedgerError::InvalidDate { year, month, day });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(LedgerError::InvalidDate { year, month, day })
    }

    /// Returns the institution's current calendar day according to `clock`.
    ///
    /// The clock reports the instant already expressed in the institutional
    /// offset, so the date is taken from the local wall time directly.
    ///
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use leave_ledger::clock::FixedClock;
    /// use leave_ledger::models::LocalDate;
    ///
    /// // 00:15 on 22 July in UTC+05:30 is still 21 July in UTC.
    /// let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    /// let clock = FixedClock::new(ist.with_ymd_and_hms(2025, 7, 22, 0, 15, 0).unwrap());
    /// assert_eq!(LocalDate::today(&clock).to_iso(), "2025-07-22");
    /// ```
    pub fn today<C: Clock + ?Sized>(clock: &C) -> Self {
        Self(clock.now().date_naive())
    }

    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// Exactly four year digits, two month digits and two day digits separated
    /// by `-` are accepted; anything else, including out-of-range components,
    /// fails with [`LedgerError::InvalidFormat`].
    ///
    /// ```
    /// use leave_ledger::models::LocalDate;
    ///
    /// assert!(LocalDate::parse_iso("2025-07-21").is_ok());
    /// assert!(LocalDate::parse_iso("2025-7-21").is_err());
    /// assert!(LocalDate::parse_iso("2025/07/21").is_err());
    /// assert!(LocalDate::parse_iso("2025-13-01").is_err());
    /// ```
    pub fn parse_iso(s: &str) -> LedgerResult<Self> {
        let invalid = || LedgerError::InvalidFormat {
            input: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        // All eight positions are ASCII digits, so these parses cannot fail.
        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
        let day: u32 = s[8..10].parse().map_err(|_| invalid())?;

        Self::from_parts(year, month, day).map_err(|_| invalid())
    }

    /// Formats the date as canonical `YYYY-MM-DD`.
    pub fn to_iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// Shifts the date by `n` calendar days (negative moves backwards).
    ///
    /// Returns `None` only when the result would leave the years `0..=9999`.
    ///
    /// ```
    /// use leave_ledger::models::LocalDate;
    ///
    /// let feb_28 = LocalDate::from_parts(2024, 2, 28).unwrap();
    /// assert_eq!(feb_28.add_days(1).unwrap().to_iso(), "2024-02-29");
    /// assert_eq!(feb_28.add_days(2).unwrap().to_iso(), "2024-03-01");
    /// assert_eq!(feb_28.add_days(-59).unwrap().to_iso(), "2023-12-31");
    /// ```
    pub fn add_days(self, n: i64) -> Option<Self> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        }?;
        (MIN_YEAR..=MAX_YEAR)
            .contains(&shifted.year())
            .then_some(Self(shifted))
    }

    /// The following calendar day, if representable.
    pub fn next_day(self) -> Option<Self> {
        self.add_days(1)
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub fn day_of_week(&self) -> u8 {
        // num_days_from_sunday is always in 0..=6
        self.0.weekday().num_days_from_sunday() as u8
    }

    /// Whether this date falls on a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.day_of_week() == 0
    }

    /// Compares two dates chronologically.
    ///
    /// `Less` means `self` is before `other`.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The month, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl FromStr for LocalDate {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl Serialize for LocalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for LocalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_iso(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{FixedOffset, TimeZone, Utc};
    use proptest::prelude::*;

    fn date(s: &str) -> LocalDate {
        LocalDate::parse_iso(s).unwrap()
    }

    #[test]
    fn test_from_parts_rejects_feb_30() {
        assert_eq!(
            LocalDate::from_parts(2025, 2, 30),
            Err(LedgerError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn test_from_parts_rejects_five_digit_year() {
        assert!(LocalDate::from_parts(10000, 1, 1).is_err());
        assert!(LocalDate::from_parts(-1, 1, 1).is_err());
    }

    #[test]
    fn test_leap_day_only_in_leap_years() {
        assert!(LocalDate::from_parts(2000, 2, 29).is_ok());
        assert!(LocalDate::from_parts(2024, 2, 29).is_ok());
        assert!(LocalDate::from_parts(1900, 2, 29).is_err());
        assert!(LocalDate::from_parts(2025, 2, 29).is_err());
    }

    #[test]
    fn test_parse_iso_rejects_deviations() {
        for input in [
            "2025-07-2",
            "2025-7-21",
            "25-07-21",
            "2025/07/21",
            "2025-07-21T00:00:00",
            " 2025-07-21",
            "2025-00-10",
            "2025-07-00",
            "2025-02-30",
            "+025-07-21",
            "2025-0a-21",
            "",
        ] {
            assert_eq!(
                LocalDate::parse_iso(input),
                Err(LedgerError::InvalidFormat {
                    input: input.to_string()
                }),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_iso_accepts_year_zero_padding() {
        let d = date("0099-01-05");
        assert_eq!(d.year(), 99);
        assert_eq!(d.to_iso(), "0099-01-05");
    }

    #[test]
    fn test_day_of_week_zero_is_sunday() {
        assert_eq!(date("2025-07-27").day_of_week(), 0);
        assert!(date("2025-07-27").is_sunday());
        assert_eq!(date("2025-07-21").day_of_week(), 1);
        assert_eq!(date("2025-07-26").day_of_week(), 6);
    }

    #[test]
    fn test_add_days_rolls_over_year() {
        assert_eq!(date("2024-12-31").add_days(1), Some(date("2025-01-01")));
        assert_eq!(date("2025-01-01").add_days(-1), Some(date("2024-12-31")));
        assert_eq!(date("2023-03-01").add_days(-1), Some(date("2023-02-28")));
        assert_eq!(date("2025-07-21").add_days(0), Some(date("2025-07-21")));
    }

    #[test]
    fn test_add_days_out_of_range_is_none() {
        assert_eq!(date("9999-12-31").add_days(1), None);
        assert_eq!(date("0000-01-01").add_days(-1), None);
        assert_eq!(date("2025-07-21").add_days(i64::MAX), None);
    }

    #[test]
    fn test_compare_orders_chronologically() {
        let a = date("2025-07-21");
        let b = date("2025-08-05");
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
        assert_eq!(a.days_until(b), 15);
        assert_eq!(b.days_until(a), -15);
    }

    #[test]
    fn test_today_uses_local_wall_date_east_of_utc() {
        // 18:45 UTC on 21 July is 00:15 on 22 July in UTC+05:30.
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let instant = Utc.with_ymd_and_hms(2025, 7, 21, 18, 45, 0).unwrap();
        let clock = FixedClock::new(instant.with_timezone(&ist));
        assert_eq!(LocalDate::today(&clock).to_iso(), "2025-07-22");
    }

    #[test]
    fn test_today_uses_local_wall_date_west_of_utc() {
        // 02:00 UTC on 22 July is still 21 July in UTC-05:00.
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let instant = Utc.with_ymd_and_hms(2025, 7, 22, 2, 0, 0).unwrap();
        let clock = FixedClock::new(instant.with_timezone(&est));
        assert_eq!(LocalDate::today(&clock), date("2025-07-21"));
    }

    #[test]
    fn test_serialize_as_iso_string() {
        let json = serde_json::to_string(&date("2025-07-21")).unwrap();
        assert_eq!(json, "\"2025-07-21\"");
    }

    #[test]
    fn test_deserialize_rejects_loose_format() {
        let parsed: Result<LocalDate, _> = serde_json::from_str("\"2025-7-21\"");
        assert!(parsed.is_err());
    }

    proptest! {
        #[test]
        fn prop_iso_round_trip(year in 0i32..=9999, month in 1u32..=12, day in 1u32..=31) {
            if let Ok(d) = LocalDate::from_parts(year, month, day) {
                prop_assert_eq!(LocalDate::parse_iso(&d.to_iso()), Ok(d));
            }
        }

        #[test]
        fn prop_iso_is_independent_of_clock_offset(
            offset_minutes in -720i32..=840,
            secs in 1_600_000_000i64..1_900_000_000,
        ) {
            let instant = Utc.timestamp_opt(secs, 0).unwrap();
            let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
            let local = instant.with_timezone(&offset);
            let today = LocalDate::today(&FixedClock::new(local));
            let rebuilt = LocalDate::from_parts(
                local.year(),
                local.month(),
                local.day(),
            ).unwrap();
            prop_assert_eq!(today.to_iso(), rebuilt.to_iso());
        }

        #[test]
        fn prop_add_days_inverse(offset in -4000i64..4000) {
            let start = LocalDate::from_parts(2025, 7, 21).unwrap();
            let shifted = start.add_days(offset).unwrap();
            prop_assert_eq!(shifted.add_days(-offset), Some(start));
            prop_assert_eq!(start.days_until(shifted), offset);
        }
    }
}
