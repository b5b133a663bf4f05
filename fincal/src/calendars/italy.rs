//! Italy (settlement) calendar.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet};
use crate::weekday::Weekend;

static ONE_OFFS: &[(u16, Month, u8)] = &[
    // millennium changeover
    (1999, Month::December, 31),
];

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::fixed("Epiphany", Month::January, 6),
    HolidayRule::easter_offset("Easter Monday", 1),
    HolidayRule::fixed("Liberation Day", Month::April, 25),
    HolidayRule::fixed("Labour Day", Month::May, 1),
    HolidayRule::fixed("Republic Day", Month::June, 2).since(2000),
    HolidayRule::fixed("Assumption Day", Month::August, 15),
    HolidayRule::fixed("All Saints' Day", Month::November, 1),
    HolidayRule::fixed("Immaculate Conception", Month::December, 8),
    HolidayRule::fixed("Christmas Day", Month::December, 25),
    HolidayRule::fixed("St. Stephen's Day", Month::December, 26),
    HolidayRule::dates("Bank closure", ONE_OFFS),
];

/// Build the Italy calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "Italy (Settlement)",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
