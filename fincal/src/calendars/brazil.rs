//! Brazil (settlement) calendar.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet};
use crate::weekday::Weekend;

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::easter_offset("Carnival Monday", -48),
    HolidayRule::easter_offset("Carnival Tuesday", -47),
    HolidayRule::easter_offset("Good Friday", -2),
    HolidayRule::fixed("Tiradentes Day", Month::April, 21),
    HolidayRule::fixed("Labour Day", Month::May, 1),
    HolidayRule::easter_offset("Corpus Christi", 60),
    HolidayRule::fixed("Independence Day", Month::September, 7),
    HolidayRule::fixed("Our Lady of Aparecida", Month::October, 12),
    HolidayRule::fixed("All Souls' Day", Month::November, 2),
    HolidayRule::fixed("Republic Day", Month::November, 15),
    HolidayRule::fixed("Christmas Day", Month::December, 25),
];

/// Build the Brazil calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "Brazil",
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
    fn carnival_and_corpus_christi_2023() {
        // Easter Sunday 2023 = April 9
        let cal = calendar();
        assert!(!cal.is_business_day(date(2023, 2, 20))); // Carnival Monday
        assert!(!cal.is_business_day(date(2023, 2, 21))); // Carnival Tuesday
        assert!(!cal.is_business_day(date(2023, 6, 8))); // Corpus Christi
    }

    #[test]
    fn fixed_holidays() {
        let cal = calendar();
        assert!(!cal.is_business_day(date(2023, 4, 21)));
        assert!(!cal.is_business_day(date(2023, 9, 7)));
        assert!(!cal.is_business_day(date(2023, 11, 15)));
    }

    #[test]
    fn normal_business_day() {
        let cal = calendar();
        // 2023-06-15 is a Thursday
        assert!(cal.is_business_day(date(2023, 6, 15)));
    }
}
