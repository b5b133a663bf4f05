//! Germany (settlement) calendar.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet};
use crate::weekday::Weekend;

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::easter_offset("Good Friday", -2),
    HolidayRule::easter_offset("Easter Monday", 1),
    HolidayRule::fixed("Labour Day", Month::May, 1),
    HolidayRule::easter_offset("Ascension Thursday", 39),
    HolidayRule::easter_offset("Whit Monday", 50),
    HolidayRule::fixed("German Unity Day", Month::October, 3),
    HolidayRule::fixed("Christmas Eve", Month::December, 24),
    HolidayRule::fixed("Christmas Day", Month::December, 25),
    HolidayRule::fixed("Boxing Day", Month::December, 26),
    HolidayRule::fixed("New Year's Eve", Month::December, 31),
];

/// Build the Germany calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "Germany (Settlement)",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn easter_cycle_2023() {
        // Easter Sunday 2023 = April 9
        let cal = calendar();
        assert!(!cal.is_business_day(date(2023, 4, 7))); // Good Friday
        assert!(!cal.is_business_day(date(2023, 4, 10))); // Easter Monday
        assert!(!cal.is_business_day(date(2023, 5, 18))); // Ascension
        assert!(!cal.is_business_day(date(2023, 5, 29))); // Whit Monday
    }

    #[test]
    fn christmas_period() {
        let cal = calendar();
        assert!(!cal.is_business_day(date(2024, 12, 24)));
        assert!(!cal.is_business_day(date(2024, 12, 25)));
        assert!(!cal.is_business_day(date(2024, 12, 26)));
        assert!(!cal.is_business_day(date(2024, 12, 31)));
    }

    #[test]
    fn german_unity_day() {
        let cal = calendar();
        assert!(!cal.is_business_day(date(2023, 10, 3)));
    }

    #[test]
    fn normal_business_day() {
        let cal = calendar();
        // 2023-06-15 is a Thursday
        assert!(cal.is_business_day(date(2023, 6, 15)));
    }
}
