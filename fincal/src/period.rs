//! `Period` — a time span expressed in a [`TimeUnit`].

use crate::time_unit::TimeUnit;

/// A time span made up of an integer length and a [`TimeUnit`].
///
/// A pure value: it is only ever consumed as an argument to date-advance
/// operations.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units (may be negative).
    pub length: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// Negate the period (reverse direction).
    pub fn negated(self) -> Self {
        Self {
            length: -self.length,
            unit: self.unit,
        }
    }

    /// Normalise the period: weeks of whole-day multiples become days and
    /// whole-year month counts become years.
    pub fn normalized(self) -> Self {
        match self.unit {
            TimeUnit::Weeks => Period::new(self.length * 7, TimeUnit::Days),
            TimeUnit::Months if self.length % 12 == 0 => {
                Period::new(self.length / 12, TimeUnit::Years)
            }
            _ => self,
        }
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Period::new(self.length * rhs, self.unit)
    }
}

impl std::ops::Mul<Period> for i32 {
    type Output = Period;
    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
