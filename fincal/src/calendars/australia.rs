//! Australia calendar.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet, Observance};
use crate::weekday::{Weekday, Weekend};

/// National public holidays plus the NSW bank and labour-day Mondays.
///
/// New Year's Day, Australia Day, Christmas Day, and Boxing Day move to the
/// next working weekday when they fall on a weekend; Anzac Day and the
/// Easter block are observed on their actual dates.
static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1).observed(Observance::NextWeekday),
    HolidayRule::fixed("Australia Day", Month::January, 26).observed(Observance::NextWeekday),
    HolidayRule::easter_offset("Good Friday", -2),
    HolidayRule::easter_offset("Easter Saturday", -1),
    HolidayRule::easter_offset("Easter Monday", 1),
    HolidayRule::fixed("Anzac Day", Month::April, 25),
    HolidayRule::nth_weekday("Queen's Birthday", 2, Weekday::Monday, Month::June),
    HolidayRule::nth_weekday("Bank Holiday", 1, Weekday::Monday, Month::August),
    HolidayRule::nth_weekday("Labour Day", 1, Weekday::Monday, Month::October),
    HolidayRule::fixed("Christmas Day", Month::December, 25).observed(Observance::NextWeekday),
    HolidayRule::fixed("Boxing Day", Month::December, 26).observed(Observance::NextWeekday),
];

/// Build the Australia calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "Australia",
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
    fn holidays_2008() {
        let cal = calendar();
        let expected = [
            date(2008, 1, 1),   // New Year's Day
            date(2008, 1, 28),  // Australia Day (Jan 26 is a Saturday)
            date(2008, 3, 21),  // Good Friday
            date(2008, 3, 24),  // Easter Monday
            date(2008, 4, 25),  // Anzac Day
            date(2008, 6, 9),   // Queen's Birthday
            date(2008, 8, 4),   // Bank Holiday
            date(2008, 10, 6),  // Labour Day
            date(2008, 12, 25), // Christmas Day
            date(2008, 12, 26), // Boxing Day
        ];
        let actual = cal
            .holiday_list(date(2008, 1, 1), date(2008, 12, 31), false)
            .unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn easter_saturday_is_a_holiday_but_never_listed() {
        let cal = calendar();
        // Easter Saturday 2008 = March 22, a Saturday: not a business day,
        // but excluded from weekday-only holiday lists.
        let sat = date(2008, 3, 22);
        assert!(!cal.is_business_day(sat));
        assert!(!cal
            .holiday_list(date(2008, 3, 1), date(2008, 3, 31), false)
            .unwrap()
            .contains(&sat));
    }

    #[test]
    fn christmas_on_weekend_shifts() {
        let cal = calendar();
        // 2021: Dec 25 Sat, Dec 26 Sun → observed Mon 27 and Tue 28
        assert!(!cal.is_business_day(date(2021, 12, 27)));
        assert!(!cal.is_business_day(date(2021, 12, 28)));
    }

    #[test]
    fn normal_business_day() {
        let cal = calendar();
        // 2008-03-12 is a Wednesday
        assert!(cal.is_business_day(date(2008, 3, 12)));
    }
}
