use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Clock time independent of a date, with minute precision.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::Display,
)]
#[display("{hour:02}:{minute:02}")]
#[serde(try_from = "String", into = "String")]
#[must_use]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    pub fn try_new(hour: i64, minute: i64) -> Result<Self, FormatError> {
        let hour = u32::try_from(hour)
            .ok()
            .filter(|hour| *hour < 24)
            .ok_or(FormatError::HourOutOfRange(hour))?;
        let minute = u32::try_from(minute)
            .ok()
            .filter(|minute| *minute < 60)
            .ok_or(FormatError::MinuteOutOfRange(minute))?;
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u32 {
        self.minute
    }

    #[must_use]
    pub const fn minute_of_day(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time_of_day: TimeOfDay) -> Self {
        // Both fields are validated on construction:
        Self::from_hms_opt(time_of_day.hour, time_of_day.minute, 0).unwrap_or(Self::MIN)
    }
}

impl From<TimeOfDay> for String {
    fn from(time_of_day: TimeOfDay) -> Self {
        time_of_day.to_string()
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_time_of_day(&value)
    }
}

impl FromStr for TimeOfDay {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_of_day(s)
    }
}

/// Parse `H:MM` or `HH:MM`.
pub fn parse_time_of_day(s: &str) -> Result<TimeOfDay, FormatError> {
    let Some((hour, minute)) = s.split_once(':') else {
        return Err(FormatError::InvalidFormat(s.to_string()));
    };
    if minute.contains(':') {
        return Err(FormatError::InvalidFormat(s.to_string()));
    }
    let parse = |field: &str| {
        field
            .parse::<i64>()
            .map_err(|source| FormatError::InvalidNumber { input: s.to_string(), source })
    };
    TimeOfDay::try_new(parse(hour)?, parse(minute)?)
}
