//! `Weekday` — day of the week — and `Weekend`, a calendar's weekend
//! definition.

/// Day of the week, numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

/// Which days of the week a calendar treats as non-working.
///
/// Most jurisdictions rest on Saturday and Sunday, but the definition is
/// calendar-specific: several Middle-Eastern markets close Friday–Saturday,
/// and the null calendar has no weekend at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weekend {
    /// Saturday and Sunday (the common case).
    #[default]
    SaturdaySunday,
    /// Friday and Saturday.
    FridaySaturday,
    /// No day is a weekend.
    Never,
}

impl Weekend {
    /// Return `true` if `weekday` falls on this weekend.
    pub fn contains(self, weekday: Weekday) -> bool {
        match self {
            Weekend::SaturdaySunday => {
                matches!(weekday, Weekday::Saturday | Weekday::Sunday)
            }
            Weekend::FridaySaturday => {
                matches!(weekday, Weekday::Friday | Weekday::Saturday)
            }
            Weekend::Never => false,
        }
    }
}
