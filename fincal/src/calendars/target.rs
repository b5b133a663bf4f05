//! TARGET (Trans-European Automated Real-time Gross settlement) calendar.
//!
//! The ECB settlement calendar, valid from 1999.  The Easter block and
//! Labour Day were added in 2000; the early years had year-end closures
//! instead.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet};
use crate::weekday::Weekend;

static YEAR_END_CLOSURES: &[(u16, Month, u8)] = &[
    (1998, Month::December, 31),
    (1999, Month::December, 31),
    (2001, Month::December, 31),
];

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::easter_offset("Good Friday", -2).since(2000),
    HolidayRule::easter_offset("Easter Monday", 1).since(2000),
    HolidayRule::fixed("Labour Day", Month::May, 1).since(2000),
    HolidayRule::fixed("Christmas Day", Month::December, 25),
    HolidayRule::fixed("Boxing Day", Month::December, 26),
    HolidayRule::dates("Year-end closure", YEAR_END_CLOSURES),
];

/// Build the TARGET calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "TARGET",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
