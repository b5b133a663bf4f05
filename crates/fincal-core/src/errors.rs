//! Error types for fincal.
//!
//! Every failure mode of the calendar engine is expressed through a single
//! `thiserror`-derived enum.  All operations are pure computations, so errors
//! are reported synchronously to the caller; there are no transient failure
//! modes, retries, or local recovery.

use thiserror::Error;

/// The top-level error type used throughout fincal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A day/month/year combination that does not form a valid Gregorian
    /// date, or a date outside the supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A date range whose start lies after its end.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A structurally invalid calendar composition (e.g. a joint calendar
    /// with fewer than two members).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A calendar was requested for a name that is not registered.
    #[error("unknown jurisdiction: {0:?}")]
    UnknownJurisdiction(String),
}

/// Shorthand `Result` type used throughout fincal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard macro: return the given error if the condition does not hold.
///
/// # Example
/// ```
/// use fincal_core::{ensure, errors::Error};
/// fn month(n: u8) -> fincal_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&n), Error::InvalidDate(format!("month {n}")));
///     Ok(n)
/// }
/// assert!(month(4).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::InvalidDate("month 13 out of range".into());
        assert_eq!(e.to_string(), "invalid date: month 13 out of range");
        let e = Error::UnknownJurisdiction("Atlantis".into());
        assert_eq!(e.to_string(), "unknown jurisdiction: \"Atlantis\"");
    }

    #[test]
    fn ensure_returns_error() {
        fn guarded(flag: bool) -> Result<()> {
            ensure!(flag, Error::InvalidRange("from after to".into()));
            Ok(())
        }
        assert!(guarded(true).is_ok());
        assert_eq!(
            guarded(false),
            Err(Error::InvalidRange("from after to".into()))
        );
    }
}
