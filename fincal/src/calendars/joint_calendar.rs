//! Joint calendar: combines two or more calendars.

use crate::calendar::Calendar;
use crate::date::Date;
use fincal_core::{ensure, Error, Result};

/// Rule for combining multiple calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointCalendarRule {
    /// A day is a holiday if it is a holiday in **any** of the constituent
    /// calendars (the union of holiday sets — the intersection of
    /// business-day sets).
    JoinHolidays,
    /// A day is a business day if it is a business day in **any** of the
    /// constituent calendars (the intersection of holiday sets — the
    /// union of business-day sets).
    JoinBusinessDays,
}

/// A calendar that combines multiple calendars according to a
/// [`JointCalendarRule`].
///
/// Joint calendars nest: a `JointCalendar` is itself a [`Calendar`] and
/// may appear as a member of another joint calendar.
pub struct JointCalendar {
    calendars: Vec<Box<dyn Calendar>>,
    rule: JointCalendarRule,
    name: String,
}

impl std::fmt::Debug for JointCalendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JointCalendar")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish()
    }
}

impl JointCalendar {
    /// Create a joint calendar from a list of calendars and a combination
    /// rule.
    ///
    /// # Errors
    /// `InvalidConfiguration` if fewer than two calendars are given; a
    /// joint calendar of one member is always a caller mistake.
    pub fn new(calendars: Vec<Box<dyn Calendar>>, rule: JointCalendarRule) -> Result<Self> {
        ensure!(
            calendars.len() >= 2,
            Error::InvalidConfiguration(format!(
                "joint calendar needs at least 2 calendars, got {}",
                calendars.len()
            ))
        );
        let names: Vec<&str> = calendars.iter().map(|c| c.name()).collect();
        let joiner = match rule {
            JointCalendarRule::JoinHolidays => ", ",
            JointCalendarRule::JoinBusinessDays => " | ",
        };
        let name = names.join(joiner);
        Ok(Self {
            calendars,
            rule,
            name,
        })
    }

    /// The combination rule.
    pub fn rule(&self) -> JointCalendarRule {
        self.rule
    }

    /// The constituent calendars, in construction order.
    pub fn calendars(&self) -> &[Box<dyn Calendar>] {
        &self.calendars
    }
}

impl Calendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        match self.rule {
            // business day only if ALL members agree
            JointCalendarRule::JoinHolidays => {
                self.calendars.iter().all(|c| c.is_business_day(date))
            }
            // business day if ANY member says so
            JointCalendarRule::JoinBusinessDays => {
                self.calendars.iter().any(|c| c.is_business_day(date))
            }
        }
    }

    fn is_weekend(&self, date: Date) -> bool {
        match self.rule {
            JointCalendarRule::JoinHolidays => self.calendars.iter().any(|c| c.is_weekend(date)),
            JointCalendarRule::JoinBusinessDays => {
                self.calendars.iter().all(|c| c.is_weekend(date))
            }
        }
    }
}
