//! Civil local time with a fixed UTC offset.
//!
//! Birth data arrives as wall-clock time plus an offset such as +5.5
//! (IST). Conversion to UTC happens once, here; everything downstream
//! works in UTC / JD(UT).

use crate::error::TimeError;
use crate::julian::calendar_to_jd;
use crate::utc_time::UtcTime;

/// Wall-clock date/time with a fixed UTC offset in hours (east positive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    /// Offset from UTC in hours, e.g. 5.5 for IST, -8.0 for PST.
    pub utc_offset_hours: f64,
}

impl LocalTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDate("day must be 1-31"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        if !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(TimeError::InvalidOffset("offset must be in [-14, +14]"));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Julian Day (UT) of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac) - self.utc_offset_hours / 24.0
    }

    /// The same instant as a UTC calendar date.
    pub fn to_utc(&self) -> UtcTime {
        UtcTime::from_jd(self.to_jd())
    }
}
