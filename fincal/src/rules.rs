//! Holiday rules and per-jurisdiction rule sets.
//!
//! A jurisdiction's calendar is a list of [`HolidayRule`] values — fixed
//! dates, weekday-of-month rules, Easter-relative offsets, year-resolved
//! formulas, and hard-coded closure tables — each carrying an
//! [`Observance`] policy that says what happens when the computed date
//! falls on a weekend.  Rule tables are plain `static` data, so adding a
//! jurisdiction means declaring a table, not writing a type.

use std::collections::BTreeSet;

use crate::date::Date;
use crate::easter::easter_sunday;
use crate::month::Month;
use crate::weekday::{Weekday, Weekend};

/// How a holiday behaves when its computed date falls on a weekend.
///
/// Policies are per-rule, table-driven data: which holidays shift, and in
/// which direction, is a jurisdiction choice, never a property of the
/// evaluation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observance {
    /// Observed on the computed date, even on a weekend.
    Exact,
    /// A weekend date is observed on the next weekday not already taken by
    /// another holiday of the same year (e.g. Boxing Day rolling past an
    /// already-shifted Christmas Day).
    NextWeekday,
    /// Saturday is observed the preceding Friday, Sunday the following
    /// Monday (United States federal style).  A shift that would leave the
    /// calendar year is not applied.
    NearestWeekday,
    /// Only a Sunday date shifts, to the next weekday not already taken by
    /// another holiday (Japanese substitute-holiday rule).
    SundaySubstitute,
}

/// How a holiday's calendar date is computed for a given year.
#[derive(Debug, Clone, Copy)]
pub enum RuleKind {
    /// The same month/day every year.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The n-th occurrence of a weekday in a month (n in 1..=5).
    NthWeekday {
        /// Which occurrence (1-based).
        nth: u8,
        /// The weekday sought.
        weekday: Weekday,
        /// Month of the holiday.
        month: Month,
    },
    /// The last occurrence of a weekday in a month.
    LastWeekday {
        /// The weekday sought.
        weekday: Weekday,
        /// Month of the holiday.
        month: Month,
    },
    /// A fixed offset in days from Easter Sunday (Good Friday is -2,
    /// Easter Monday +1, Whit Monday +50, …).
    EasterOffset(i32),
    /// A year-dependent date computed by a resolver function, `None` when
    /// the holiday is not observed that year.
    ByYear(fn(u16) -> Option<Date>),
    /// Hard-coded (year, month, day) entries; used for closures that follow
    /// no formula, such as lunar-calendar holidays.  A rule may contribute
    /// several dates to the same year.
    Dates(&'static [(u16, Month, u8)]),
}

/// A single holiday rule: a name, a date computation, an observance policy,
/// and the range of years in which the rule applies.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRule {
    name: &'static str,
    kind: RuleKind,
    observance: Observance,
    since: u16,
    until: u16,
    except: &'static [u16],
}

impl HolidayRule {
    const fn new(name: &'static str, kind: RuleKind) -> Self {
        Self {
            name,
            kind,
            observance: Observance::Exact,
            since: 0,
            until: u16::MAX,
            except: &[],
        }
    }

    /// A holiday on the same month/day every year.
    pub const fn fixed(name: &'static str, month: Month, day: u8) -> Self {
        Self::new(name, RuleKind::Fixed { month, day })
    }

    /// The n-th `weekday` of `month`.
    pub const fn nth_weekday(name: &'static str, nth: u8, weekday: Weekday, month: Month) -> Self {
        Self::new(name, RuleKind::NthWeekday { nth, weekday, month })
    }

    /// The last `weekday` of `month`.
    pub const fn last_weekday(name: &'static str, weekday: Weekday, month: Month) -> Self {
        Self::new(name, RuleKind::LastWeekday { weekday, month })
    }

    /// A holiday `days` after Easter Sunday (negative = before).
    pub const fn easter_offset(name: &'static str, days: i32) -> Self {
        Self::new(name, RuleKind::EasterOffset(days))
    }

    /// A holiday resolved per year by `resolver`.
    pub const fn by_year(name: &'static str, resolver: fn(u16) -> Option<Date>) -> Self {
        Self::new(name, RuleKind::ByYear(resolver))
    }

    /// A holiday given by explicit per-year dates.
    pub const fn dates(name: &'static str, table: &'static [(u16, Month, u8)]) -> Self {
        Self::new(name, RuleKind::Dates(table))
    }

    /// Set the weekend-observance policy (default [`Observance::Exact`]).
    pub const fn observed(mut self, observance: Observance) -> Self {
        self.observance = observance;
        self
    }

    /// First year (inclusive) the rule applies.
    pub const fn since(mut self, year: u16) -> Self {
        self.since = year;
        self
    }

    /// Last year (inclusive) the rule applies.
    pub const fn until(mut self, year: u16) -> Self {
        self.until = year;
        self
    }

    /// Years in which the rule is suspended (e.g. a bank holiday moved for
    /// a one-off national event).
    pub const fn except(mut self, years: &'static [u16]) -> Self {
        self.except = years;
        self
    }

    /// Human-readable holiday name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn applies_to(&self, year: u16) -> bool {
        year >= self.since && year <= self.until && !self.except.contains(&year)
    }

    /// Raw (pre-observance) dates this rule produces for `year`.
    fn raw_dates(&self, year: u16) -> Vec<Date> {
        if !self.applies_to(year) {
            return Vec::new();
        }
        match self.kind {
            RuleKind::Fixed { month, day } => {
                Date::from_ymd(year, month.number(), day).ok().into_iter().collect()
            }
            RuleKind::NthWeekday { nth, weekday, month } => {
                Date::nth_weekday(nth, weekday, year, month).ok().into_iter().collect()
            }
            RuleKind::LastWeekday { weekday, month } => {
                Date::last_weekday_in_month(weekday, year, month).ok().into_iter().collect()
            }
            RuleKind::EasterOffset(days) => easter_sunday(year)
                .and_then(|e| e.add_days(days))
                .ok()
                .into_iter()
                .collect(),
            RuleKind::ByYear(resolver) => resolver(year).into_iter().collect(),
            RuleKind::Dates(table) => table
                .iter()
                .filter(|(y, _, _)| *y == year)
                .filter_map(|(y, m, d)| Date::from_ymd(*y, m.number(), *d).ok())
                .collect(),
        }
    }
}

/// An ordered collection of holiday rules for one jurisdiction.
#[derive(Debug, Clone, Default)]
pub struct HolidayRuleSet {
    rules: Vec<HolidayRule>,
}

impl HolidayRuleSet {
    /// Create a rule set from a list of rules.
    pub fn new(rules: Vec<HolidayRule>) -> Self {
        Self { rules }
    }

    /// Create a rule set from a static jurisdiction table.
    pub fn from_table(table: &'static [HolidayRule]) -> Self {
        Self { rules: table.to_vec() }
    }

    /// Return `true` if the set contains no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// The rules, in declaration order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Evaluate every rule for `year`, apply observance shifts, and return
    /// the de-duplicated, ordered set of holiday dates.
    ///
    /// Shifts are collision-aware: a holiday moved off a weekend rolls past
    /// dates produced by other rules of the same year, so paired holidays
    /// (Christmas Day / Boxing Day, the Japanese May cluster) land on
    /// distinct days.  Deduplication happens here, at evaluation time,
    /// because moveable rules are year-dependent.
    pub fn resolve(&self, year: u16, weekend: Weekend) -> BTreeSet<Date> {
        let raw: Vec<(&HolidayRule, Vec<Date>)> = self
            .rules
            .iter()
            .map(|r| (r, r.raw_dates(year)))
            .collect();

        // Raw dates count as taken so a shifted holiday never lands on a
        // date another rule produces later in the table.
        let mut taken: BTreeSet<Date> = raw.iter().flat_map(|(_, ds)| ds.iter().copied()).collect();
        let mut resolved = BTreeSet::new();

        for (rule, dates) in raw {
            for date in dates {
                let observed = observe(date, rule.observance, weekend, &taken);
                taken.insert(observed);
                resolved.insert(observed);
            }
        }
        resolved
    }
}

fn observe(date: Date, observance: Observance, weekend: Weekend, taken: &BTreeSet<Date>) -> Date {
    match observance {
        Observance::Exact => date,
        Observance::NextWeekday => {
            if weekend.contains(date.weekday()) {
                roll_forward(date, weekend, taken).unwrap_or(date)
            } else {
                date
            }
        }
        Observance::NearestWeekday => {
            let shifted = match date.weekday() {
                Weekday::Saturday => date.add_days(-1),
                Weekday::Sunday => date.add_days(1),
                _ => return date,
            };
            match shifted {
                Ok(s) if s.year() == date.year() => s,
                _ => date,
            }
        }
        Observance::SundaySubstitute => {
            if date.weekday() == Weekday::Sunday {
                roll_forward(date, weekend, taken).unwrap_or(date)
            } else {
                date
            }
        }
    }
}

/// First day after `date` that is neither on the weekend nor already taken.
fn roll_forward(date: Date, weekend: Weekend, taken: &BTreeSet<Date>) -> Option<Date> {
    let mut d = date.add_days(1).ok()?;
    loop {
        if !weekend.contains(d.weekday()) && !taken.contains(&d) {
            return Some(d);
        }
        d = d.add_days(1).ok()?;
    }
}
