//! # fincal
//!
//! Business-day calendars for financial markets: per-jurisdiction holiday
//! rule sets, business-day predicates, holiday enumeration, and date
//! adjustment under business-day conventions.
//!
//! Calendars are immutable values.  A jurisdiction is *data* — a static
//! table of [`rules::HolidayRule`] values — not a type; the single
//! [`calendar::HolidayCalendar`] carrier evaluates whichever table it wraps.
//!
//! ## Quick start
//! ```
//! use fincal::calendars::Jurisdiction;
//! use fincal::{BusinessDayConvention, Calendar, Date, Period, TimeUnit};
//!
//! let cal = Jurisdiction::Target.calendar();
//! let d = Date::from_ymd(2023, 12, 22)?; // Friday before Christmas
//! assert!(cal.is_business_day(d));
//! let settled = cal.advance(d, Period::new(3, TimeUnit::Days),
//!                           BusinessDayConvention::Following)?;
//! assert_eq!(settled, Date::from_ymd(2023, 12, 27)?);
//! # Ok::<(), fincal::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and basic implementations.
pub mod calendar;

/// Jurisdiction rule tables, the jurisdiction registry, and joint calendars.
pub mod calendars;

/// `Date` type and Gregorian date arithmetic.
pub mod date;

/// Easter Sunday computation (Gregorian computus).
pub mod easter;

/// `Month` — month-of-year enum.
pub mod month;

/// `Period` — a time span in a `TimeUnit`.
pub mod period;

/// Holiday rules and per-jurisdiction rule sets.
pub mod rules;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` and weekend definitions.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, HolidayCalendar, NullCalendar, WeekendsOnly};
pub use calendars::joint_calendar::{JointCalendar, JointCalendarRule};
pub use calendars::Jurisdiction;
pub use date::Date;
pub use fincal_core::{Error, Result};
pub use month::Month;
pub use period::Period;
pub use rules::{HolidayRule, HolidayRuleSet, Observance};
pub use time_unit::TimeUnit;
pub use weekday::{Weekday, Weekend};
