use crate::error::clock::ClockError;
use crate::error::clock::ClockError::FormatTimeFailed;
use time::macros::format_description;
use time::OffsetDateTime;

/// Supplies the current time as display-ready text.
pub trait Clock {
    fn now(&self) -> Result<String, ClockError>;
}

/// Reads the system clock, in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn format(time: OffsetDateTime) -> Result<String, ClockError> {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
        time.format(&format).map_err(FormatTimeFailed)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<String, ClockError> {
        Self::format(OffsetDateTime::now_utc())
    }
}

/// Always reports the same moment.
#[derive(Clone, Debug)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(now: impl Into<String>) -> Self {
        Self(now.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<String, ClockError> {
        Ok(self.0.clone())
    }
}
