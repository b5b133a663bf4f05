//! Japan calendar.
//!
//! A national holiday falling on a Sunday is observed on the next free
//! weekday (*furikae kyūjitsu*); the January 2–3 and December 31 bank
//! closures do not substitute.  Equinox days use the customary
//! astronomical approximation; the true dates are proclaimed annually.

use crate::calendar::HolidayCalendar;
use crate::date::Date;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet, Observance};
use crate::weekday::{Weekday, Weekend};

fn equinox_day(base: f64, year: u16) -> u8 {
    let y = f64::from(year) - 1980.0;
    (base + 0.242194 * y - (y / 4.0).floor()) as u8
}

fn vernal_equinox(year: u16) -> Option<Date> {
    Date::from_ymd(year, 3, equinox_day(20.8431, year)).ok()
}

fn autumnal_equinox(year: u16) -> Option<Date> {
    Date::from_ymd(year, 9, equinox_day(23.2488, year)).ok()
}

/// Citizen's Holiday: a Tuesday sandwiched between Respect for the Aged
/// Day (3rd Monday of September) and a Wednesday autumnal equinox.
fn citizens_holiday(year: u16) -> Option<Date> {
    let ae = autumnal_equinox(year)?;
    if ae.weekday() != Weekday::Wednesday {
        return None;
    }
    let tuesday = ae.add_days(-1).ok()?;
    (tuesday.day_of_month() >= 16).then_some(tuesday)
}

static OLYMPIC_MOVES: &[(u16, Month, u8)] = &[
    // Tokyo Olympics: Marine Day, Sports Day, and Mountain Day were moved
    // around the planned opening and closing ceremonies.
    (2020, Month::July, 23),
    (2020, Month::July, 24),
    (2020, Month::August, 10),
];

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::fixed("Bank Holiday", Month::January, 2),
    HolidayRule::fixed("Bank Holiday", Month::January, 3)
        .observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Coming of Age Day", Month::January, 15)
        .observed(Observance::SundaySubstitute)
        .until(1999),
    HolidayRule::nth_weekday("Coming of Age Day", 2, Weekday::Monday, Month::January).since(2000),
    HolidayRule::fixed("National Foundation Day", Month::February, 11)
        .observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Emperor's Birthday", Month::December, 23)
        .observed(Observance::SundaySubstitute)
        .until(2018),
    HolidayRule::fixed("Emperor's Birthday", Month::February, 23)
        .observed(Observance::SundaySubstitute)
        .since(2020),
    HolidayRule::by_year("Vernal Equinox Day", vernal_equinox)
        .observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Showa Day", Month::April, 29).observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Constitution Memorial Day", Month::May, 3)
        .observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Greenery Day", Month::May, 4).observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Children's Day", Month::May, 5).observed(Observance::SundaySubstitute),
    HolidayRule::nth_weekday("Marine Day", 3, Weekday::Monday, Month::July)
        .since(2003)
        .except(&[2020]),
    HolidayRule::fixed("Marine Day", Month::July, 20)
        .observed(Observance::SundaySubstitute)
        .since(1996)
        .until(2002),
    HolidayRule::fixed("Mountain Day", Month::August, 11)
        .observed(Observance::SundaySubstitute)
        .since(2016)
        .except(&[2020]),
    HolidayRule::nth_weekday("Respect for the Aged Day", 3, Weekday::Monday, Month::September),
    HolidayRule::by_year("Autumnal Equinox Day", autumnal_equinox)
        .observed(Observance::SundaySubstitute),
    HolidayRule::by_year("Citizen's Holiday", citizens_holiday),
    HolidayRule::fixed("Sports Day", Month::October, 10)
        .observed(Observance::SundaySubstitute)
        .until(1999),
    HolidayRule::nth_weekday("Sports Day", 2, Weekday::Monday, Month::October)
        .since(2000)
        .except(&[2020]),
    HolidayRule::fixed("Culture Day", Month::November, 3).observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Labour Thanksgiving Day", Month::November, 23)
        .observed(Observance::SundaySubstitute),
    HolidayRule::fixed("Bank Holiday", Month::December, 31),
    HolidayRule::dates("Olympic holiday", OLYMPIC_MOVES),
];

/// Build the Japan calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "Japan",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
