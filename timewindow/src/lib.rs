//! Recurring time-of-day windows, such as «business hours», optionally limited to some days
//! of the week.
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use timewindow::WindowSpec;
//!
//! let window = WindowSpec::try_parse("10:30", "14:00", ["Wed", "Tue", "Thu"]).unwrap();
//!
//! // Wednesday:
//! let result = window.evaluate(Utc.with_ymd_and_hms(2000, 1, 5, 12, 0, 0).unwrap());
//! assert!(result.is_within);
//! assert_eq!(result.time_to_end, TimeDelta::hours(2));
//! ```

mod calendar;
mod config;
mod error;
mod result;
mod time_of_day;
mod weekday;
mod window;

pub use self::{
    calendar::until_next_midnight,
    config::WindowsConfig,
    error::{ConfigurationError, Error, Field, FormatError},
    result::WindowResult,
    time_of_day::{TimeOfDay, parse_time_of_day},
    weekday::{Weekday, WeekdaySet, parse_weekday_set},
    window::{WindowInstants, WindowSpec, evaluate},
};
