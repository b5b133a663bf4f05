//! `Date` — an immutable Gregorian calendar date.
//!
//! Dates are stored as a serial number of days: serial 1 is
//! January 1, 1901 and the supported range runs through December 31, 2199.
//! The serial representation makes equality, ordering, and day arithmetic
//! trivial; conversions to and from year/month/day use the standard
//! days-from-civil algorithm.

use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use fincal_core::{ensure, Error, Result};

/// A calendar date represented as a serial number of days.
///
/// `Date` is a `Copy` value type: every operation returns a new date and
/// never mutates its input.  Equality and ordering are total and derived
/// solely from the serial number (i.e. from year/month/day).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// Offset between the internal serial number and days since 1970-01-01:
/// `serial = days_from_civil + EPOCH_OFFSET`, so serial 1 = 1901-01-01.
const EPOCH_OFFSET: i32 = 25_203;

impl Date {
    /// Minimum supported date: January 1, 1901.
    pub const MIN: Date = Date(1);

    /// Maximum supported date: December 31, 2199.
    pub const MAX: Date = Date(109_208);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1901–2199), month (1–12), and day of month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1901..=2199).contains(&year),
            Error::InvalidDate(format!("year {year} out of range [1901, 2199]"))
        );
        ensure!(
            (1..=12).contains(&month),
            Error::InvalidDate(format!("month {month} out of range [1, 12]"))
        );
        let last = days_in_month(year, month);
        ensure!(
            day >= 1 && day <= last,
            Error::InvalidDate(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            ))
        );
        Ok(Date(days_from_civil(year as i32, month, day) + EPOCH_OFFSET))
    }

    /// Create a date from a serial number (1 = 1901-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            Error::InvalidDate(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            ))
        );
        Ok(Date(serial))
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(self) -> i32 {
        self.0
    }

    /// Return the year (1901–2199).
    pub fn year(self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(self) -> u16 {
        let (y, _, _) = self.ymd();
        (self.0 - (days_from_civil(y as i32, 1, 1) + EPOCH_OFFSET) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(self) -> Weekday {
        // Days since 1970-01-01, which was a Thursday (ordinal 4).
        let days = self.0 - EPOCH_OFFSET;
        let ordinal = ((days + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(ordinal).expect("ordinal is always in 1..=7")
    }

    fn ymd(self) -> (u16, u8, u8) {
        civil_from_days(self.0 - EPOCH_OFFSET)
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// Advance by `n` days.  Fails if the result is out of the supported
    /// range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Date::from_serial(self.0 + n)
    }

    /// Advance by `n` units of the given [`TimeUnit`], returning a new date.
    ///
    /// Month and year steps clamp the day of month to the length of the
    /// landing month: Jan 31 plus one month is Feb 28 (or Feb 29 in a leap
    /// year).  Day and week steps are exact and therefore invertible;
    /// month and year steps are not, precisely because of the clamp.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n * 7),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let total = y as i32 * 12 + (m as i32 - 1) + n;
                let year = total.div_euclid(12);
                let month = (total.rem_euclid(12) + 1) as u8;
                ensure!(
                    (1901..=2199).contains(&year),
                    Error::InvalidDate(format!("year {year} out of range [1901, 2199]"))
                );
                let year = year as u16;
                let day = d.min(days_in_month(year, month));
                Date::from_ymd(year, month, day)
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(days_from_civil(y as i32, m, days_in_month(y, m)) + EPOCH_OFFSET)
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the *n*-th occurrence of `weekday` in the given month.
    ///
    /// `nth_weekday(2, Weekday::Monday, 2008, Month::June)` is the second
    /// Monday of June 2008 (June 9).
    ///
    /// # Errors
    /// Fails if `nth` is zero or the month has no such occurrence.
    pub fn nth_weekday(nth: u8, weekday: Weekday, year: u16, month: Month) -> Result<Self> {
        ensure!(
            (1..=5).contains(&nth),
            Error::InvalidDate(format!("nth_weekday: nth {nth} out of range [1, 5]"))
        );
        let first = Date::from_ymd(year, month.number(), 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7);
        let day = 1 + skip as u8 + 7 * (nth - 1);
        ensure!(
            day <= days_in_month(year, month.number()),
            Error::InvalidDate(format!(
                "no {nth}-th {weekday} in {month} {year}"
            ))
        );
        Date::from_ymd(year, month.number(), day)
    }

    /// Return the last occurrence of `weekday` in the given month.
    pub fn last_weekday_in_month(weekday: Weekday, year: u16, month: Month) -> Result<Self> {
        let eom = Date::from_ymd(year, month.number(), days_in_month(year, month.number()))?;
        let back = (eom.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        eom.add_days(-back)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        let month = Month::from_number(m).map_or("?", Month::name);
        write!(f, "{d} {month} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Gregorian helpers ─────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a civil date (Howard Hinnant's algorithm).
fn days_from_civil(y: i32, m: u8, d: u8) -> i32 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (m as i32 + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + d as i32 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i32) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = if m <= 2 { y + 1 } else { y };
    (y as u16, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn epoch() {
        let d = date(1901, 1, 1);
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
        assert_eq!(d.weekday(), Weekday::Tuesday);
        assert_eq!(date(2199, 12, 31), Date::MAX);
    }

    #[test]
    fn ymd_roundtrip() {
        let cases = [
            (1901, 1, 1),
            (1901, 12, 31),
            (2000, 2, 29), // leap century
            (2100, 2, 28), // non-leap century
            (2008, 10, 6),
            (2023, 6, 15),
            (2199, 12, 31),
        ];
        for (y, m, d) in cases {
            let dt = date(y, m, d);
            assert_eq!((dt.year(), dt.month(), dt.day_of_month()), (y, m, d));
        }
    }

    #[test]
    fn weekday_anchors() {
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(2008, 1, 1).weekday(), Weekday::Tuesday);
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2023, 1, 1).weekday(), Weekday::Sunday);
    }

    #[test]
    fn invalid_dates_rejected() {
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 0, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 30).is_err());
        assert!(Date::from_ymd(1900, 6, 1).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn day_of_year() {
        assert_eq!(date(2008, 1, 1).day_of_year(), 1);
        assert_eq!(date(2008, 12, 31).day_of_year(), 366); // leap
        assert_eq!(date(2009, 12, 31).day_of_year(), 365);
    }

    #[test]
    fn month_advance_clamps() {
        // Jan 31 + 1M = Feb 28 (or Feb 29 in a leap year)
        assert_eq!(date(2023, 1, 31).advance(1, TimeUnit::Months).unwrap(), date(2023, 2, 28));
        assert_eq!(date(2008, 1, 31).advance(1, TimeUnit::Months).unwrap(), date(2008, 2, 29));
        // Mar 31 - 1M clamps too
        assert_eq!(date(2023, 3, 31).advance(-1, TimeUnit::Months).unwrap(), date(2023, 2, 28));
        // Feb 29 + 1Y = Feb 28
        assert_eq!(date(2008, 2, 29).advance(1, TimeUnit::Years).unwrap(), date(2009, 2, 28));
    }

    #[test]
    fn month_advance_crosses_years() {
        assert_eq!(date(2009, 10, 11).advance(3, TimeUnit::Months).unwrap(), date(2010, 1, 11));
        assert_eq!(date(2010, 1, 11).advance(-3, TimeUnit::Months).unwrap(), date(2009, 10, 11));
        assert_eq!(date(2023, 12, 15).advance(13, TimeUnit::Months).unwrap(), date(2025, 1, 15));
    }

    #[test]
    fn day_arithmetic() {
        let d = date(2023, 1, 1);
        assert_eq!(d + 31, date(2023, 2, 1));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(d.advance(2, TimeUnit::Weeks).unwrap(), date(2023, 1, 15));
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn end_of_month() {
        assert_eq!(date(2024, 2, 15).end_of_month(), date(2024, 2, 29));
        assert!(date(2024, 2, 29).is_end_of_month());
        assert!(!date(2024, 2, 28).is_end_of_month());
    }

    #[test]
    fn nth_weekday() {
        // 2nd Monday of June 2008 = June 9
        assert_eq!(
            Date::nth_weekday(2, Weekday::Monday, 2008, Month::June).unwrap(),
            date(2008, 6, 9)
        );
        // 1st Monday of January 2024 = January 1
        assert_eq!(
            Date::nth_weekday(1, Weekday::Monday, 2024, Month::January).unwrap(),
            date(2024, 1, 1)
        );
        // no 5th Wednesday in February 2024
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, Month::February).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, Month::January).is_err());
    }

    #[test]
    fn last_weekday_in_month() {
        // Memorial Day 2023: last Monday of May = May 29
        assert_eq!(
            Date::last_weekday_in_month(Weekday::Monday, 2023, Month::May).unwrap(),
            date(2023, 5, 29)
        );
        // last Monday of May 2008 = May 26
        assert_eq!(
            Date::last_weekday_in_month(Weekday::Monday, 2008, Month::May).unwrap(),
            date(2008, 5, 26)
        );
    }

    #[test]
    fn display_formats() {
        assert_eq!(date(2008, 3, 21).to_string(), "21 March 2008");
        assert_eq!(format!("{:?}", date(2008, 3, 21)), "Date(2008-03-21)");
    }

    proptest! {
        // Day/week advances are exact, so they must round-trip exactly.
        #[test]
        fn days_and_weeks_roundtrip(
            y in 1950u16..=2150,
            m in 1u8..=12,
            d in 1u8..=28,
            n in -5000i32..=5000,
            weeks in proptest::bool::ANY,
        ) {
            let unit = if weeks { TimeUnit::Weeks } else { TimeUnit::Days };
            let start = Date::from_ymd(y, m, d).unwrap();
            if let Ok(moved) = start.advance(n, unit) {
                prop_assert_eq!(moved.advance(-n, unit).unwrap(), start);
            }
        }

        #[test]
        fn serial_roundtrip(s in 1i32..=109_208) {
            let d = Date::from_serial(s).unwrap();
            let back = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
            prop_assert_eq!(back.serial(), s);
        }
    }
}
