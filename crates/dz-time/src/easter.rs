//! Gregorian Easter Sunday (anonymous Gregorian / Meeus algorithm).

use crate::date::Date;
use dz_core::errors::Result;

/// Month (3 or 4) and day of Easter Sunday in `year`.
///
/// Valid for any Gregorian year; all intermediate terms are non-negative for
/// non-negative years, so integer division is floor division.
pub fn easter_month_day(year: u32) -> (u8, u8) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    // 32 + 2e + 2i is at least 32 while h + k is at most 32
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u8, (n % 31 + 1) as u8)
}

/// Easter Sunday of `year` as a [`Date`].
pub fn easter_sunday(year: u16) -> Result<Date> {
    let (month, day) = easter_month_day(u32::from(year));
    Date::from_ymd(year, month, day)
}
