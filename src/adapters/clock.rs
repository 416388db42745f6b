use crate::domain::ports::Clock;
use crate::utils::error::{Result, TourError};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .ok_or_else(|| TourError::DateError {
                message: format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02} is not a valid calendar time",
                    year, month, day, hour, min, sec
                ),
            })?;
        let instant = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| TourError::DateError {
                message: format!("{} does not exist in the local time zone", naive),
            })?;
        Ok(Self::new(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}
