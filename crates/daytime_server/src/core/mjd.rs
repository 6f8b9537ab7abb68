//! Modified Julian Date
//!
//! JJJJJ in the daytime line is the MJD: whole days since midnight,
//! November 17, 1858.

use crate::core::models::CalendarTime;

const EPOCH_YEAR: i64 = 1858;
/// Day of the year of November 17 in 1858, January 1st = 0
const EPOCH_DAY_OF_YEAR: i64 = 320;
const DAYS_PER_YEAR: i64 = 365;

/// Gregorian leap days in the years before `year`
fn leap_days_before(year: i64) -> i64 {
    let y = year - 1;
    y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// MJD of a calendar date
///
/// Counts Gregorian leap days exactly; the legacy `(year - 100) / 4` term
/// reads one day low in years not divisible by four (2001, 2026).
pub fn modified_julian_date(now: &CalendarTime) -> i64 {
    let year = i64::from(now.year());

    DAYS_PER_YEAR * (year - EPOCH_YEAR)
        + (leap_days_before(year) - leap_days_before(EPOCH_YEAR))
        + i64::from(now.day_of_year())
        - EPOCH_DAY_OF_YEAR
}
