//! Easter computus and the Easter-relative feast days.
//!
//! Easter Sunday is computed with the anonymous Gregorian algorithm
//! (Meeus/Jones/Butcher, derived from Gauss). Carnival Tuesday and Corpus
//! Christi are fixed offsets from it, so all three always fall in the same
//! year as their Easter.

use crate::date::Date;

/// Days from Easter Sunday back to Carnival Tuesday.
pub const CARNIVAL_OFFSET: i32 = -47;

/// Days from Easter Sunday forward to Corpus Christi.
pub const CORPUS_CHRISTI_OFFSET: i32 = 60;

/// Return `(month, day)` of Easter Sunday in `year`.
pub fn easter_month_day(year: u16) -> (u8, u8) {
    let y = year as i32;
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Easter Sunday of `year`.
///
/// Total over the valid [`Date`] range: Easter always falls between
/// March 22 and April 25.
pub fn easter_sunday(year: u16) -> Date {
    let (month, day) = easter_month_day(year);
    match Date::from_ymd(year, month, day) {
        Ok(date) => date,
        Err(_) => unreachable!("Easter {year}-{month:02}-{day:02} is always a valid date"),
    }
}

/// Carnival Tuesday of `year` (Easter − 47 days).
pub fn carnival(year: u16) -> Date {
    easter_sunday(year).shifted_unchecked(CARNIVAL_OFFSET)
}

/// Corpus Christi of `year` (Easter + 60 days).
pub fn corpus_christi(year: u16) -> Date {
    easter_sunday(year).shifted_unchecked(CORPUS_CHRISTI_OFFSET)
}
