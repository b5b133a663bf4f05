//! Argentina (Buenos Aires) calendar.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet};
use crate::weekday::{Weekday, Weekend};

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::easter_offset("Carnival Monday", -48),
    HolidayRule::easter_offset("Carnival Tuesday", -47),
    HolidayRule::fixed("Truth and Justice Memorial Day", Month::March, 24),
    HolidayRule::fixed("Malvinas Day", Month::April, 2),
    HolidayRule::easter_offset("Good Friday", -2),
    HolidayRule::fixed("Labour Day", Month::May, 1),
    HolidayRule::fixed("Revolution Day", Month::May, 25),
    HolidayRule::fixed("Flag Day", Month::June, 20),
    HolidayRule::fixed("Independence Day", Month::July, 9),
    HolidayRule::nth_weekday("Death of General San Martin", 3, Weekday::Monday, Month::August),
    HolidayRule::nth_weekday("Cultural Diversity Day", 2, Weekday::Monday, Month::October),
    HolidayRule::nth_weekday("Sovereignty Day", 4, Weekday::Monday, Month::November),
    HolidayRule::fixed("Immaculate Conception", Month::December, 8),
    HolidayRule::fixed("Christmas Day", Month::December, 25),
];

/// Build the Argentina calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "Argentina",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
