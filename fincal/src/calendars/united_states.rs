//! United States (settlement) calendar.
//!
//! Federal holidays: a Saturday holiday is observed the preceding Friday,
//! a Sunday holiday the following Monday.  A Friday observance that would
//! fall in the previous year is not applied.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet, Observance};
use crate::weekday::{Weekday, Weekend};

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1)
        .observed(Observance::NearestWeekday),
    HolidayRule::nth_weekday("Martin Luther King's Birthday", 3, Weekday::Monday, Month::January)
        .since(1983),
    HolidayRule::nth_weekday("Washington's Birthday", 3, Weekday::Monday, Month::February),
    HolidayRule::last_weekday("Memorial Day", Weekday::Monday, Month::May),
    HolidayRule::fixed("Juneteenth", Month::June, 19)
        .observed(Observance::NearestWeekday)
        .since(2022),
    HolidayRule::fixed("Independence Day", Month::July, 4)
        .observed(Observance::NearestWeekday),
    HolidayRule::nth_weekday("Labor Day", 1, Weekday::Monday, Month::September),
    HolidayRule::nth_weekday("Columbus Day", 2, Weekday::Monday, Month::October),
    HolidayRule::fixed("Veterans' Day", Month::November, 11)
        .observed(Observance::NearestWeekday),
    HolidayRule::nth_weekday("Thanksgiving Day", 4, Weekday::Thursday, Month::November),
    HolidayRule::fixed("Christmas Day", Month::December, 25)
        .observed(Observance::NearestWeekday),
];

/// Build the United States calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "US (Settlement)",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
