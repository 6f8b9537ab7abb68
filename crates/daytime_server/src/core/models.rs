use std::fmt;

use chrono::{DateTime, Datelike, NaiveDateTime, Utc, Weekday};

use crate::core::utils::{
    DATETIME_FORMAT, DAYTIME_MSG_LEN, MESSAGE_TRAILER, MJD_MODULUS, MJD_WIDTH,
};

/// A captured UTC calendar instant
///
/// Exposes the broken-down date fields the MJD and TT computations work from.
/// Months are 0-based and days of the year start at 0; days of the month
/// start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    datetime: NaiveDateTime,
}

impl CalendarTime {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self { datetime }
    }

    /// Capture the current UTC time
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    /// Month, January = 0
    pub fn month0(&self) -> u32 {
        self.datetime.month0()
    }

    /// Day of the month, starting at 1
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    /// Day of the year, January 1st = 0
    pub fn day_of_year(&self) -> u32 {
        self.datetime.ordinal0()
    }

    pub fn weekday(&self) -> Weekday {
        self.datetime.weekday()
    }

    /// `YY-MM-DD HH:MM:SS`
    pub fn timestamp_text(&self) -> String {
        self.datetime.format(DATETIME_FORMAT).to_string()
    }
}

impl From<DateTime<Utc>> for CalendarTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(dt.naive_utc())
    }
}

impl From<NaiveDateTime> for CalendarTime {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

/// Two-digit US daylight saving time transition code (TT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransitionCode(u8);

impl TransitionCode {
    /// Standard time in effect
    pub const STANDARD: Self = Self(0);
    /// Daylight saving time ends at 2 a.m. local time today
    pub const TO_STANDARD_TODAY: Self = Self(1);
    /// Daylight saving time in effect
    pub const DAYLIGHT: Self = Self(50);
    /// Daylight saving time begins at 2 a.m. local time today
    pub const TO_DAYLIGHT_TODAY: Self = Self(51);

    pub(crate) const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for TransitionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.value() % 100)
    }
}

/// One NIST-format daytime line, exactly [`DAYTIME_MSG_LEN`] bytes
///
/// ```text
/// \nJJJJJ YY-MM-DD HH:MM:SS TT 0 0  00.0 UTC(NIST) * \n
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaytimeMessage {
    line: String,
}

impl DaytimeMessage {
    pub(crate) fn assemble(mjd: i64, now: &CalendarTime, tt: TransitionCode) -> Self {
        let line = format!(
            "\n{:0width$} {} {} {}\n",
            mjd.rem_euclid(MJD_MODULUS),
            now.timestamp_text(),
            tt,
            MESSAGE_TRAILER,
            width = MJD_WIDTH,
        );
        debug_assert_eq!(line.len(), DAYTIME_MSG_LEN);

        Self { line }
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.line.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }
}

impl fmt::Display for DaytimeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
