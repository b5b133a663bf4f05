//! Jurisdiction calendars.
//!
//! Each submodule declares one jurisdiction's holiday rule table and a
//! constructor returning a [`HolidayCalendar`].  The [`Jurisdiction`] enum
//! is the registry: calendars can be obtained by enumerator or looked up
//! by name with [`calendar_for`].

pub mod argentina;
pub mod australia;
pub mod brazil;
pub mod china;
pub mod germany;
pub mod italy;
pub mod japan;
pub mod joint_calendar;
pub mod switzerland;
pub mod target;
pub mod united_kingdom;
pub mod united_states;

use crate::calendar::{Calendar, HolidayCalendar, NullCalendar, WeekendsOnly};
use fincal_core::{Error, Result};

/// A market/jurisdiction with a built-in holiday rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jurisdiction {
    /// Argentina (Buenos Aires).
    Argentina,
    /// Australia (national public holidays, NSW bank holidays).
    Australia,
    /// Brazil (settlement).
    Brazil,
    /// China — Shanghai Stock Exchange.
    China,
    /// Germany (settlement).
    Germany,
    /// Italy (settlement).
    Italy,
    /// Japan.
    Japan,
    /// Switzerland.
    Switzerland,
    /// TARGET (Trans-European Automated Real-time Gross settlement).
    Target,
    /// United Kingdom (settlement).
    UnitedKingdom,
    /// United States (settlement / federal holidays).
    UnitedStates,
}

impl Jurisdiction {
    /// All registered jurisdictions.
    pub const ALL: &'static [Jurisdiction] = &[
        Jurisdiction::Argentina,
        Jurisdiction::Australia,
        Jurisdiction::Brazil,
        Jurisdiction::China,
        Jurisdiction::Germany,
        Jurisdiction::Italy,
        Jurisdiction::Japan,
        Jurisdiction::Switzerland,
        Jurisdiction::Target,
        Jurisdiction::UnitedKingdom,
        Jurisdiction::UnitedStates,
    ];

    /// Build the calendar for this jurisdiction.
    pub fn calendar(self) -> HolidayCalendar {
        match self {
            Jurisdiction::Argentina => argentina::calendar(),
            Jurisdiction::Australia => australia::calendar(),
            Jurisdiction::Brazil => brazil::calendar(),
            Jurisdiction::China => china::calendar(),
            Jurisdiction::Germany => germany::calendar(),
            Jurisdiction::Italy => italy::calendar(),
            Jurisdiction::Japan => japan::calendar(),
            Jurisdiction::Switzerland => switzerland::calendar(),
            Jurisdiction::Target => target::calendar(),
            Jurisdiction::UnitedKingdom => united_kingdom::calendar(),
            Jurisdiction::UnitedStates => united_states::calendar(),
        }
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Lookup is forgiving about case, spaces, and punctuation:
        // "United Kingdom", "UnitedKingdom", and "united-kingdom" all match.
        let key: String = s
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "argentina" => Ok(Jurisdiction::Argentina),
            "australia" => Ok(Jurisdiction::Australia),
            "brazil" => Ok(Jurisdiction::Brazil),
            "china" | "chinasse" => Ok(Jurisdiction::China),
            "germany" | "germanysettlement" => Ok(Jurisdiction::Germany),
            "italy" | "italysettlement" => Ok(Jurisdiction::Italy),
            "japan" => Ok(Jurisdiction::Japan),
            "switzerland" => Ok(Jurisdiction::Switzerland),
            "target" => Ok(Jurisdiction::Target),
            "unitedkingdom" | "uk" | "uksettlement" => Ok(Jurisdiction::UnitedKingdom),
            "unitedstates" | "us" | "ussettlement" => Ok(Jurisdiction::UnitedStates),
            _ => Err(Error::UnknownJurisdiction(s.to_string())),
        }
    }
}

/// Look up a calendar by name.
///
/// Accepts every [`Jurisdiction`] name plus `"Null"` and `"Weekends only"`.
///
/// # Errors
/// `UnknownJurisdiction` if the name is not registered.
pub fn calendar_for(name: &str) -> Result<Box<dyn Calendar>> {
    let key: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();
    match key.as_str() {
        "null" => Ok(Box::new(NullCalendar)),
        "weekendsonly" => Ok(Box::new(WeekendsOnly)),
        _ => name.parse::<Jurisdiction>().map(|j| Box::new(j.calendar()) as Box<dyn Calendar>),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!("Australia".parse::<Jurisdiction>().unwrap(), Jurisdiction::Australia);
        assert_eq!("United Kingdom".parse::<Jurisdiction>().unwrap(), Jurisdiction::UnitedKingdom);
        assert_eq!("TARGET".parse::<Jurisdiction>().unwrap(), Jurisdiction::Target);
        assert_eq!("china (sse)".parse::<Jurisdiction>().unwrap(), Jurisdiction::China);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "Atlantis".parse::<Jurisdiction>().unwrap_err();
        assert_eq!(err, Error::UnknownJurisdiction("Atlantis".into()));
        assert!(calendar_for("Atlantis").is_err());
    }

    #[test]
    fn degenerate_calendars_by_name() {
        let null = calendar_for("Null").unwrap();
        assert!(null.is_business_day(date(2023, 9, 2))); // Saturday
        let wk = calendar_for("Weekends only").unwrap();
        assert!(!wk.is_business_day(date(2023, 9, 2)));
    }

    #[test]
    fn yearly_holiday_lists_are_ordered_and_consistent() {
        for &j in Jurisdiction::ALL {
            let cal = j.calendar();
            let list = cal
                .holiday_list(date(2010, 1, 1), date(2010, 12, 31), false)
                .unwrap();
            assert!(
                list.windows(2).all(|w| w[0] < w[1]),
                "{:?}: list not strictly ascending",
                j
            );
            for d in list {
                assert!(!cal.is_business_day(d), "{:?}: {d} listed but business", j);
                assert!(!cal.is_weekend(d), "{:?}: {d} listed but weekend", j);
            }
        }
    }
}
