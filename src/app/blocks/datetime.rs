use crate::core::Context;
use crate::utils::error::{Result, TourError};
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Timelike, Utc};
use std::fmt::Display;

/// Calendar fields of an instant; `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateParts {
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
            day: instant.day(),
            hour: instant.hour(),
            minute: instant.minute(),
            second: instant.second(),
        }
    }
}

/// Midnight of the given day in `tz`. `month_index` is 0-based and rolls
/// over into neighbouring years when outside `0..=11`.
pub fn date_in<Tz: TimeZone>(tz: &Tz, year: i32, month_index: i32, day: u32) -> Result<DateTime<Tz>> {
    let year = year
        .checked_add(month_index.div_euclid(12))
        .ok_or_else(|| TourError::DateError {
            message: format!("year {} with month index {} is out of range", year, month_index),
        })?;
    let month = month_index.rem_euclid(12) as u32 + 1;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TourError::DateError {
            message: format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
        })?;

    // 夏令時間造成的重複或缺口取最早的有效時刻
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TourError::DateError {
            message: format!("{} does not exist in the local time zone", naive),
        })
}

pub fn local_date(year: i32, month_index: i32, day: u32) -> Result<DateTime<Local>> {
    date_in(&Local, year, month_index, day)
}

pub fn to_full_string<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

pub fn to_date_string<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%a %b %d %Y").to_string()
}

pub fn to_time_string<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    instant.format("%H:%M:%S GMT%z").to_string()
}

pub fn to_iso_string<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

pub fn run(ctx: &mut Context<'_>) -> Result<()> {
    let now = ctx.host.clock.now();
    let fixed = local_date(2024, 0, 15)?;
    let parts = DateParts::of(&now);

    ctx.log(format!("Current date: {}", to_full_string(&now)));
    ctx.log(format!("Current timestamp: {}", now.timestamp_millis()));
    ctx.log(format!("Year: {}", parts.year));
    ctx.log(format!("Month: {}", parts.month));
    ctx.log(format!("Day: {}", parts.day));
    ctx.log(format!("Hours: {}", parts.hour));
    ctx.log(format!("Minutes: {}", parts.minute));
    ctx.log(format!("Seconds: {}", parts.second));

    ctx.log(format!("Formatted date: {}", to_date_string(&now)));
    ctx.log(format!("Formatted time: {}", to_time_string(&now)));
    ctx.log(format!("ISO string: {}", to_iso_string(&now)));

    ctx.log(format!("Fixed date: {}", to_full_string(&fixed)));
    ctx.log(format!("Fixed timestamp: {}", fixed.timestamp_millis()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::blocks::testing::capture;
    use crate::core::Section;
    use chrono::FixedOffset;

    #[test]
    fn test_month_index_zero_is_january() {
        let date = date_in(&Utc, 2024, 0, 15).unwrap();
        assert_eq!(
            DateParts::of(&date),
            DateParts {
                year: 2024,
                month: 1,
                day: 15,
                hour: 0,
                minute: 0,
                second: 0,
            }
        );
        assert_eq!(date.timestamp_millis(), 1_705_276_800_000);
    }

    #[test]
    fn test_month_index_rolls_over() {
        let next = date_in(&Utc, 2024, 12, 1).unwrap();
        assert_eq!((next.year(), next.month()), (2025, 1));

        let previous = date_in(&Utc, 2024, -1, 1).unwrap();
        assert_eq!((previous.year(), previous.month()), (2023, 12));
    }

    #[test]
    fn test_invalid_day_is_error() {
        assert!(date_in(&Utc, 2023, 1, 29).is_err());
    }

    #[test]
    fn test_year_overflow_is_error() {
        assert!(date_in(&Utc, i32::MAX, 12, 1).is_err());
        assert!(date_in(&Utc, i32::MIN, -1, 1).is_err());
    }

    #[test]
    fn test_renderings() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = tz.with_ymd_and_hms(2024, 1, 15, 9, 5, 3).unwrap();

        assert_eq!(to_date_string(&instant), "Mon Jan 15 2024");
        assert_eq!(to_time_string(&instant), "09:05:03 GMT+0200");
        assert_eq!(to_full_string(&instant), "Mon Jan 15 2024 09:05:03 GMT+0200");
        assert_eq!(to_iso_string(&instant), "2024-01-15T07:05:03.000Z");
    }

    #[test]
    fn test_block_reads_host_clock() {
        let lines = capture(Section::DateTime);
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("Current date: Mon Jan 15 2024 09:30:00 GMT"));
        assert_eq!(lines[2], "Year: 2024");
        assert_eq!(lines[3], "Month: 1");
        assert_eq!(lines[4], "Day: 15");
        assert_eq!(lines[5], "Hours: 9");
        assert_eq!(lines[6], "Minutes: 30");
        assert_eq!(lines[7], "Seconds: 0");
        assert_eq!(lines[8], "Formatted date: Mon Jan 15 2024");
        assert!(lines[11].starts_with("Fixed date: Mon Jan 15 2024 00:00:00 GMT"));
    }
}
