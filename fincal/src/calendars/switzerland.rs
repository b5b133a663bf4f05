//! Switzerland calendar.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet};
use crate::weekday::Weekend;

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::fixed("Berchtoldstag", Month::January, 2),
    HolidayRule::easter_offset("Good Friday", -2),
    HolidayRule::easter_offset("Easter Monday", 1),
    HolidayRule::fixed("Labour Day", Month::May, 1),
    HolidayRule::easter_offset("Ascension Day", 39),
    HolidayRule::easter_offset("Whit Monday", 50),
    HolidayRule::fixed("National Day", Month::August, 1),
    HolidayRule::fixed("Christmas Day", Month::December, 25),
    HolidayRule::fixed("St. Stephen's Day", Month::December, 26),
];

/// Build the Switzerland calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "Switzerland",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
