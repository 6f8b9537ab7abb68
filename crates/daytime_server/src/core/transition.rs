//! US daylight saving time transition code (TT)
//!
//! Since 2007, DST begins at 2:00 a.m. on the second Sunday of March and
//! ends at 2:00 a.m. on the first Sunday of November. TT is 00 during
//! standard time and 50 during DST. In the advance-notice window of each
//! transition month it counts down once a day and reaches 51 (spring) or
//! 01 (fall) on the day of the change.

use chrono::Weekday;

use crate::core::models::{CalendarTime, TransitionCode};

const MARCH: u32 = 2;
const NOVEMBER: u32 = 10;

/// Number of Sundays from day 1 through `day` of the month, inclusive
///
/// `weekday` is the weekday of `day` itself.
pub fn sundays_elapsed(day: u32, weekday: Weekday) -> u32 {
    let wday = weekday.num_days_from_sunday();
    if day <= wday {
        0
    } else {
        // most recent Sunday on or before `day` is `day - wday`
        (day - wday - 1) / 7 + 1
    }
}

/// Spring advance-notice table, used until the first Sunday has passed
fn march_countdown(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => 51,
        Weekday::Mon => 57,
        Weekday::Tue => 56,
        Weekday::Wed => 55,
        Weekday::Thu => 54,
        Weekday::Fri => 53,
        Weekday::Sat => 52,
    }
}

/// Fall advance-notice table, used before the first Sunday
pub(crate) fn november_countdown(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => {
            // no Sunday precedes the first one
            tracing::warn!("November countdown reached for a Sunday, reporting transition day");
            1
        }
        Weekday::Mon => 7,
        Weekday::Tue => 6,
        Weekday::Wed => 5,
        Weekday::Thu => 4,
        Weekday::Fri => 3,
        Weekday::Sat => 2,
    }
}

fn march(day: u32, weekday: Weekday) -> TransitionCode {
    let sundays = sundays_elapsed(day, weekday);

    if sundays <= 1 {
        let mut tt = march_countdown(weekday);
        if sundays == 0 {
            tt += 7;
        }
        TransitionCode::new(tt)
    } else if sundays == 2 && weekday == Weekday::Sun {
        TransitionCode::TO_DAYLIGHT_TODAY
    } else {
        TransitionCode::DAYLIGHT
    }
}

fn november(day: u32, weekday: Weekday) -> TransitionCode {
    let sundays = sundays_elapsed(day, weekday);

    if sundays == 0 {
        TransitionCode::new(november_countdown(weekday))
    } else if sundays == 1 && weekday == Weekday::Sun {
        TransitionCode::TO_STANDARD_TODAY
    } else {
        TransitionCode::STANDARD
    }
}

/// TT for a calendar date
pub fn transition_code(now: &CalendarTime) -> TransitionCode {
    match now.month0() {
        MARCH => march(now.day(), now.weekday()),
        NOVEMBER => november(now.day(), now.weekday()),
        // April through October
        3..=9 => TransitionCode::DAYLIGHT,
        // December, January, February
        _ => TransitionCode::STANDARD,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Days, NaiveDate};

    use super::*;

    fn tt(y: i32, m: u32, d: u32) -> u8 {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        transition_code(&CalendarTime::new(date.and_hms_opt(12, 0, 0).unwrap())).value()
    }

    fn nth_sunday(y: i32, m: u32, n: u32) -> NaiveDate {
        NaiveDate::from_weekday_of_month_opt(y, m, Weekday::Sun, n as u8).unwrap()
    }

    fn each_day(y: i32, m: u32) -> impl Iterator<Item = NaiveDate> {
        let first = NaiveDate::from_ymd_opt(y, m, 1).unwrap();
        first.iter_days().take_while(move |d| d.month() == m)
    }

    #[test]
    fn test_sundays_elapsed_matches_scan() {
        // every possible weekday for the 1st of a month
        for first in 1..=7 {
            let start = NaiveDate::from_ymd_opt(2023, 10, first).unwrap();
            for offset in 0..31u64 {
                let date = start + Days::new(offset);
                let day = offset as u32 + 1;
                let scanned = (0..=offset)
                    .filter(|o| (start + Days::new(*o)).weekday() == Weekday::Sun)
                    .count() as u32;
                assert_eq!(sundays_elapsed(day, date.weekday()), scanned, "day {day} from {start}");
            }
        }
    }

    #[test]
    fn test_standard_time_months() {
        for year in 2015..=2030 {
            for month in [12, 1, 2] {
                for date in each_day(year, month) {
                    assert_eq!(tt(year, month, date.day()), 0, "{date}");
                }
            }
        }
    }

    #[test]
    fn test_daylight_time_months() {
        for year in 2015..=2030 {
            for month in 4..=10 {
                for date in each_day(year, month) {
                    assert_eq!(tt(year, month, date.day()), 50, "{date}");
                }
            }
        }
    }

    #[test]
    fn test_march_transition_day() {
        for year in 2015..=2030 {
            let second = nth_sunday(year, 3, 2);
            assert_eq!(tt(year, 3, second.day()), 51, "{second}");

            let saturday = second.pred_opt().unwrap();
            assert_eq!(tt(year, 3, saturday.day()), 52, "{saturday}");

            let monday = second.succ_opt().unwrap();
            assert_eq!(tt(year, 3, monday.day()), 50, "{monday}");
        }
    }

    #[test]
    fn test_march_week_before_counts_down() {
        // 2024: first Sunday March 3, second Sunday March 10
        let expected = [(4, 57), (5, 56), (6, 55), (7, 54), (8, 53), (9, 52), (10, 51)];
        for (day, code) in expected {
            assert_eq!(tt(2024, 3, day), code, "March {day}, 2024");
        }
    }

    #[test]
    fn test_march_before_first_sunday_reads_one_week_further() {
        // 2024: March 1 is a Friday, March 2 a Saturday
        assert_eq!(tt(2024, 3, 1), 60);
        assert_eq!(tt(2024, 3, 2), 59);
        // 2026: March 1 is the first Sunday
        assert_eq!(tt(2026, 3, 1), 51);
        // 2021: March 1 is a Monday
        assert_eq!(tt(2021, 3, 1), 64);
    }

    #[test]
    fn test_march_after_transition_is_daylight() {
        for year in 2015..=2030 {
            let second = nth_sunday(year, 3, 2);
            for date in each_day(year, 3).filter(|d| *d > second) {
                assert_eq!(tt(year, 3, date.day()), 50, "{date}");
            }
        }
    }

    #[test]
    fn test_november_transition_day() {
        for year in 2015..=2030 {
            let first = nth_sunday(year, 11, 1);
            assert_eq!(tt(year, 11, first.day()), 1, "{first}");

            let monday = first.succ_opt().unwrap();
            assert_eq!(tt(year, 11, monday.day()), 0, "{monday}");

            if first.day() > 1 {
                let saturday = first.pred_opt().unwrap();
                assert_eq!(tt(year, 11, saturday.day()), 2, "{saturday}");
            }
        }
    }

    #[test]
    fn test_november_countdown() {
        // 2026: November 1 is a Sunday; 2027: November 7 is the first Sunday
        assert_eq!(tt(2026, 11, 1), 1);
        let expected = [(1, 7), (2, 6), (3, 5), (4, 4), (5, 3), (6, 2), (7, 1), (8, 0)];
        for (day, code) in expected {
            assert_eq!(tt(2027, 11, day), code, "November {day}, 2027");
        }
    }

    #[test]
    fn test_november_after_transition_is_standard() {
        for year in 2015..=2030 {
            let first = nth_sunday(year, 11, 1);
            for date in each_day(year, 11).filter(|d| *d > first) {
                assert_eq!(tt(year, 11, date.day()), 0, "{date}");
            }
        }
    }

    #[test]
    fn test_november_sunday_fallback() {
        // Unreachable through transition_code: a Sunday always counts itself.
        assert_eq!(sundays_elapsed(1, Weekday::Sun), 1);
        assert_eq!(november_countdown(Weekday::Sun), 1);
    }
}
