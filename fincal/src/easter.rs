//! Gregorian Easter Sunday computation.
//!
//! Easter is the reference point for every moveable feast handled by the
//! rule engine (Good Friday, Easter Monday, Carnival, Ascension, Whit
//! Monday, Corpus Christi, …), so the computus lives here as a shared
//! primitive.

use crate::date::Date;
use fincal_core::Result;

/// Return Easter Sunday for the given year.
///
/// Uses the anonymous Gregorian computus (Meeus/Jones/Butcher).  Fails only
/// if `year` is outside the supported date range.
pub fn easter_sunday(year: u16) -> Result<Date> {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = ((h + l - 7 * m + 114) / 31) as u8; // 3 = March, 4 = April
    let day = ((h + l - 7 * m + 114) % 31 + 1) as u8;
    Date::from_ymd(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn known_easters() {
        let cases = [
            (1999, 4, 4),
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2023, 4, 9),
            (2024, 3, 31),
            (2038, 4, 25), // latest date Easter can fall on
        ];
        for (y, m, d) in cases {
            assert_eq!(
                easter_sunday(y).unwrap(),
                Date::from_ymd(y, m, d).unwrap(),
                "Easter {y}"
            );
        }
    }

    #[test]
    fn out_of_range_year() {
        assert!(easter_sunday(2285).is_err());
    }

    #[test]
    fn always_a_sunday() {
        for y in (1901..2199).step_by(13) {
            assert_eq!(easter_sunday(y).unwrap().weekday(), Weekday::Sunday, "{y}");
        }
    }
}
