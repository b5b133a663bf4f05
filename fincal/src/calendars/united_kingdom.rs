//! United Kingdom (settlement) calendar.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet, Observance};
use crate::weekday::{Weekday, Weekend};

static ONE_OFFS: &[(u16, Month, u8)] = &[
    // VE Day anniversaries (May Day moved)
    (1995, Month::May, 8),
    (2020, Month::May, 8),
    // millennium changeover
    (1999, Month::December, 31),
    // Golden Jubilee (spring bank holiday moved plus an extra day)
    (2002, Month::June, 3),
    (2002, Month::June, 4),
    // Royal Wedding
    (2011, Month::April, 29),
    // Diamond Jubilee
    (2012, Month::June, 4),
    (2012, Month::June, 5),
    // Platinum Jubilee
    (2022, Month::June, 2),
    (2022, Month::June, 3),
    // Queen Elizabeth II's funeral
    (2022, Month::September, 19),
    // Coronation of King Charles III
    (2023, Month::May, 8),
];

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1).observed(Observance::NextWeekday),
    HolidayRule::easter_offset("Good Friday", -2),
    HolidayRule::easter_offset("Easter Monday", 1),
    HolidayRule::nth_weekday("Early May Bank Holiday", 1, Weekday::Monday, Month::May)
        .except(&[1995, 2020]),
    HolidayRule::last_weekday("Spring Bank Holiday", Weekday::Monday, Month::May)
        .except(&[2002, 2012, 2022]),
    HolidayRule::last_weekday("Summer Bank Holiday", Weekday::Monday, Month::August),
    HolidayRule::fixed("Christmas Day", Month::December, 25).observed(Observance::NextWeekday),
    HolidayRule::fixed("Boxing Day", Month::December, 26).observed(Observance::NextWeekday),
    HolidayRule::dates("Special holiday", ONE_OFFS),
];

/// Build the United Kingdom calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "UK (Settlement)",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
