//! China (Shanghai Stock Exchange) calendar.
//!
//! Spring Festival, Labour Day, and National Day closures follow the lunar
//! calendar and government decree, so they are kept as per-year closure
//! tables rather than formulas.  The tables cover 2004–2010; later years
//! need new entries when the closures are announced.

use crate::calendar::HolidayCalendar;
use crate::month::Month;
use crate::rules::{HolidayRule, HolidayRuleSet};
use crate::weekday::Weekend;

static SPRING_FESTIVAL: &[(u16, Month, u8)] = &[
    (2004, Month::January, 22),
    (2004, Month::January, 23),
    (2004, Month::January, 26),
    (2004, Month::January, 27),
    (2004, Month::January, 28),
    (2005, Month::February, 7),
    (2005, Month::February, 8),
    (2005, Month::February, 9),
    (2005, Month::February, 10),
    (2005, Month::February, 11),
    (2006, Month::January, 26),
    (2006, Month::January, 27),
    (2006, Month::January, 30),
    (2006, Month::January, 31),
    (2006, Month::February, 1),
    (2006, Month::February, 2),
    (2006, Month::February, 3),
    (2007, Month::February, 19),
    (2007, Month::February, 20),
    (2007, Month::February, 21),
    (2007, Month::February, 22),
    (2007, Month::February, 23),
    (2008, Month::February, 6),
    (2008, Month::February, 7),
    (2009, Month::January, 26),
    (2009, Month::January, 27),
    (2009, Month::January, 28),
    (2009, Month::January, 29),
    (2009, Month::January, 30),
    (2010, Month::February, 15),
    (2010, Month::February, 16),
    (2010, Month::February, 17),
    (2010, Month::February, 18),
    (2010, Month::February, 19),
];

static LABOUR_DAY: &[(u16, Month, u8)] = &[
    (2004, Month::May, 3),
    (2004, Month::May, 4),
    (2004, Month::May, 5),
    (2004, Month::May, 6),
    (2004, Month::May, 7),
    (2005, Month::May, 2),
    (2005, Month::May, 3),
    (2005, Month::May, 4),
    (2005, Month::May, 5),
    (2005, Month::May, 6),
    (2006, Month::May, 1),
    (2006, Month::May, 2),
    (2006, Month::May, 3),
    (2006, Month::May, 4),
    (2006, Month::May, 5),
    (2007, Month::May, 1),
    (2007, Month::May, 2),
    (2007, Month::May, 3),
    (2007, Month::May, 4),
    (2007, Month::May, 7),
    (2008, Month::May, 1),
    (2008, Month::May, 2),
    (2008, Month::May, 5),
    (2008, Month::May, 6),
    (2008, Month::May, 7),
    (2009, Month::May, 1),
    (2010, Month::May, 3),
];

static NATIONAL_DAY: &[(u16, Month, u8)] = &[
    (2004, Month::October, 1),
    (2004, Month::October, 4),
    (2004, Month::October, 5),
    (2004, Month::October, 6),
    (2004, Month::October, 7),
    (2005, Month::October, 3),
    (2005, Month::October, 4),
    (2005, Month::October, 5),
    (2005, Month::October, 6),
    (2005, Month::October, 7),
    (2006, Month::October, 2),
    (2006, Month::October, 3),
    (2006, Month::October, 4),
    (2006, Month::October, 5),
    (2006, Month::October, 6),
    (2007, Month::October, 1),
    (2007, Month::October, 2),
    (2007, Month::October, 3),
    (2007, Month::October, 4),
    (2007, Month::October, 5),
    (2008, Month::October, 1),
    (2008, Month::October, 2),
    (2008, Month::October, 3),
    (2008, Month::October, 6),
    (2008, Month::October, 7),
    (2009, Month::October, 1),
    (2009, Month::October, 2),
    (2009, Month::October, 5),
    (2009, Month::October, 6),
    (2009, Month::October, 7),
    (2009, Month::October, 8),
    (2010, Month::October, 1),
    (2010, Month::October, 4),
    (2010, Month::October, 5),
    (2010, Month::October, 6),
    (2010, Month::October, 7),
];

static RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", Month::January, 1),
    HolidayRule::dates("Spring Festival", SPRING_FESTIVAL),
    HolidayRule::dates("Labour Day holiday", LABOUR_DAY),
    HolidayRule::dates("National Day holiday", NATIONAL_DAY),
];

/// Build the China (SSE) calendar.
pub fn calendar() -> HolidayCalendar {
    HolidayCalendar::new(
        "China (SSE)",
        Weekend::SaturdaySunday,
        HolidayRuleSet::from_table(RULES),
    )
}
