use crate::core::{
    mjd::modified_julian_date,
    models::{CalendarTime, DaytimeMessage},
    transition::transition_code,
};

/// Builds NIST-format daytime messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DaytimeFormatter;

impl DaytimeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render the daytime line for `now`
    pub fn format(&self, now: &CalendarTime) -> DaytimeMessage {
        DaytimeMessage::assemble(modified_julian_date(now), now, transition_code(now))
    }

    /// Render the daytime line for the current UTC time
    pub fn current_message(&self) -> DaytimeMessage {
        self.format(&CalendarTime::now())
    }
}
