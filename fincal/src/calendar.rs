//! `Calendar` trait and basic calendar implementations.
//!
//! A calendar knows which dates are business days, can enumerate holidays
//! over a range, and adjusts or advances dates according to a
//! [`BusinessDayConvention`].

use std::collections::BTreeSet;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::period::Period;
use crate::rules::HolidayRuleSet;
use crate::weekday::Weekend;
use fincal_core::{ensure, Error, Result};

/// A financial calendar.
///
/// Calendars are immutable after construction and hold no external
/// resources; every operation is a pure function of the rule set and the
/// query, so shared references may be queried concurrently without
/// coordination.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"TARGET"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on this calendar's weekend.
    ///
    /// Most calendars rest on Saturday and Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Enumerate the non-business days in `[from, to]`, strictly ascending
    /// and duplicate-free.
    ///
    /// With `include_weekends` false, dates on the calendar's weekend are
    /// omitted — only holidays landing on working weekdays are listed.
    /// With it true, every non-business day appears, weekends included.
    ///
    /// # Errors
    /// `InvalidRange` if `from > to`.
    fn holiday_list(&self, from: Date, to: Date, include_weekends: bool) -> Result<Vec<Date>> {
        ensure!(
            from <= to,
            Error::InvalidRange(format!("holiday list: {from} is after {to}"))
        );
        let mut holidays = Vec::new();
        let mut d = from;
        loop {
            if self.is_holiday(d) && (include_weekends || !self.is_weekend(d)) {
                holidays.push(d);
            }
            if d == to {
                break;
            }
            d = d + 1;
        }
        Ok(holidays)
    }

    /// Adjust `date` to a business day according to `convention`.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d + 1;
                }
                d
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following);
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    adjusted
                }
            }
            BusinessDayConvention::Preceding => {
                let mut d = date;
                while self.is_holiday(d) {
                    d = d - 1;
                }
                d
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding);
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    adjusted
                }
            }
        }
    }

    /// Advance `date` by `period`, then adjust the landing date to a
    /// business day according to `convention`.
    ///
    /// The arithmetic step is pure calendar arithmetic (with day-of-month
    /// clamping for month/year periods); only the landing date is
    /// adjusted.  On a calendar where every day is a business day the
    /// adjustment is a no-op.
    fn advance(
        &self,
        date: Date,
        period: Period,
        convention: BusinessDayConvention,
    ) -> Result<Date> {
        let moved = date.advance(period.length, period.unit)?;
        Ok(self.adjust(moved, convention))
    }

    /// Advance `date` by `n` business days (negative moves backwards).
    fn advance_business_days(&self, date: Date, n: i32) -> Date {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        let mut d = date;
        while remaining > 0 {
            d = d + step;
            if self.is_business_day(d) {
                remaining -= 1;
            }
        }
        d
    }

    /// Count business days between `d1` (exclusive) and `d2` (inclusive);
    /// negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.is_business_day(d) {
                count += 1;
            }
            d = d + 1;
        }
        sign * count
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Date {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> bool {
        date.month() != self.adjust(date + 1, BusinessDayConvention::Following).month()
    }
}

/// A calendar driven by a [`HolidayRuleSet`] and a [`Weekend`] definition.
///
/// This is the single carrier for every jurisdiction: the built-in tables
/// in [`crate::calendars`] and caller-supplied rule sets both evaluate
/// through it.  Holidays are resolved per queried year, on demand.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    weekend: Weekend,
    rules: HolidayRuleSet,
}

impl HolidayCalendar {
    /// Create a calendar from a weekend definition and a rule set.
    pub fn new(name: impl Into<String>, weekend: Weekend, rules: HolidayRuleSet) -> Self {
        Self {
            name: name.into(),
            weekend,
            rules,
        }
    }

    /// The weekend definition.
    pub fn weekend(&self) -> Weekend {
        self.weekend
    }

    /// The underlying rule set.
    pub fn rule_set(&self) -> &HolidayRuleSet {
        &self.rules
    }

    /// Resolve the rule set for one year: the ordered, de-duplicated set of
    /// holiday dates (weekend days are not included unless a rule puts a
    /// holiday there).
    pub fn holidays_in_year(&self, year: u16) -> BTreeSet<Date> {
        self.rules.resolve(year, self.weekend)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.weekend.contains(date.weekday())
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays_in_year(date.year()).contains(&date)
    }
}

/// A null calendar: every day is a business day, no weekend, no holidays.
///
/// Advancing under any convention never adjusts, making this the identity
/// element for composition and a pure-arithmetic baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// A calendar with Saturday/Sunday weekends and no further holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;
    use crate::rules::HolidayRule;
    use crate::time_unit::TimeUnit;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn single_holiday_calendar() -> HolidayCalendar {
        static RULES: &[HolidayRule] = &[HolidayRule::fixed("Mid-June Day", Month::June, 15)];
        HolidayCalendar::new(
            "Test",
            Weekend::SaturdaySunday,
            HolidayRuleSet::from_table(RULES),
        )
    }

    #[test]
    fn null_calendar_every_day_business() {
        let cal = NullCalendar;
        assert!(cal.is_business_day(date(2023, 12, 25)));
        assert!(cal.is_business_day(date(2023, 9, 2))); // Saturday
        assert!(!cal.is_weekend(date(2023, 9, 2)));
        assert_eq!(cal.holiday_list(date(2023, 1, 1), date(2023, 12, 31), true).unwrap(), vec![]);
    }

    #[test]
    fn null_calendar_advance_is_pure_arithmetic() {
        let cal = NullCalendar;
        let original = date(2009, 10, 11);
        let moved = cal
            .advance(original, Period::new(3, TimeUnit::Months), BusinessDayConvention::Following)
            .unwrap();
        assert_eq!(moved, date(2010, 1, 11));
        assert_ne!(moved, original);
        // the input value is untouched
        assert_eq!(original, date(2009, 10, 11));
    }

    #[test]
    fn weekends_only_calendar() {
        let cal = WeekendsOnly;
        assert!(!cal.is_business_day(date(2023, 9, 2))); // Saturday
        assert!(cal.is_business_day(date(2023, 9, 4))); // Monday
    }

    #[test]
    fn adjust_conventions() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Following), date(2023, 9, 4));
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Preceding), date(2023, 9, 1));
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Unadjusted), sat);
        // Sep 30 2023 is a Saturday: Following leaves the month, so
        // ModifiedFollowing backs up to Friday Sep 29.
        let eom_sat = date(2023, 9, 30);
        assert_eq!(
            cal.adjust(eom_sat, BusinessDayConvention::ModifiedFollowing),
            date(2023, 9, 29)
        );
        // Oct 1 2023 is a Sunday: Preceding leaves the month, so
        // ModifiedPreceding moves forward to Monday Oct 2.
        let som_sun = date(2023, 10, 1);
        assert_eq!(
            cal.adjust(som_sun, BusinessDayConvention::ModifiedPreceding),
            date(2023, 10, 2)
        );
    }

    #[test]
    fn advance_adjusts_landing_date() {
        let cal = WeekendsOnly;
        // Friday + 1 day lands on Saturday → Following pushes to Monday
        let fri = date(2023, 9, 1);
        assert_eq!(
            cal.advance(fri, Period::new(1, TimeUnit::Days), BusinessDayConvention::Following)
                .unwrap(),
            date(2023, 9, 4)
        );
        // Unadjusted keeps the raw landing date
        assert_eq!(
            cal.advance(fri, Period::new(1, TimeUnit::Days), BusinessDayConvention::Unadjusted)
                .unwrap(),
            date(2023, 9, 2)
        );
    }

    #[test]
    fn holiday_list_bad_range() {
        let cal = WeekendsOnly;
        let err = cal
            .holiday_list(date(2023, 6, 2), date(2023, 6, 1), false)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
    }

    #[test]
    fn holiday_list_weekend_filtering() {
        let cal = single_holiday_calendar();
        // June 15 2023 is a Thursday
        let june = cal
            .holiday_list(date(2023, 6, 1), date(2023, 6, 30), false)
            .unwrap();
        assert_eq!(june, vec![date(2023, 6, 15)]);
        // with weekends included, all Saturdays/Sundays appear too
        let all = cal
            .holiday_list(date(2023, 6, 1), date(2023, 6, 30), true)
            .unwrap();
        assert_eq!(all.len(), 9); // 8 weekend days + the holiday
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn holiday_list_agrees_with_is_business_day() {
        let cal = single_holiday_calendar();
        for d in cal
            .holiday_list(date(2023, 1, 1), date(2023, 12, 31), true)
            .unwrap()
        {
            assert!(!cal.is_business_day(d), "{d} listed but business");
        }
    }

    #[test]
    fn advance_business_days_and_count() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        assert_eq!(cal.advance_business_days(mon, 4), date(2023, 9, 8)); // Friday
        assert_eq!(cal.advance_business_days(mon, 5), date(2023, 9, 11)); // next Monday
        assert_eq!(cal.advance_business_days(mon, -1), date(2023, 9, 1)); // prev Friday
        assert_eq!(cal.business_days_between(mon, date(2023, 9, 8)), 4);
        assert_eq!(cal.business_days_between(date(2023, 9, 8), mon), -4);
        assert_eq!(cal.business_days_between(mon, mon), 0);
    }

    #[test]
    fn end_of_month_skips_weekend() {
        let cal = WeekendsOnly;
        // Sep 30 2023 is a Saturday → last business day is Friday Sep 29
        assert_eq!(cal.end_of_month(date(2023, 9, 12)), date(2023, 9, 29));
        assert!(cal.is_end_of_month(date(2023, 9, 29)));
        assert!(!cal.is_end_of_month(date(2023, 9, 28)));
    }
}
