use std::cmp::Ordering;

use chrono::{DateTime, Datelike, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    calendar::combine,
    error::{Error, Field},
    result::WindowResult,
    time_of_day::{TimeOfDay, parse_time_of_day},
    weekday::{Weekday, WeekdaySet, parse_weekday_set},
};

/// Recurring daily time window, optionally limited to some days of the week.
///
/// The start is inclusive and the end is exclusive. When the end is earlier than the start,
/// the window crosses midnight and ends on the following day.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize, bon::Builder)]
#[must_use]
pub struct WindowSpec {
    pub start: TimeOfDay,

    pub end: TimeOfDay,

    /// Days on which the window starts, empty for every day.
    #[serde(default)]
    #[builder(default)]
    pub weekdays: WeekdaySet,
}

impl WindowSpec {
    /// Parse the window parts, reporting which one is invalid.
    pub fn try_parse<I>(start: &str, end: &str, weekdays: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(Self {
            start: parse_time_of_day(start).map_err(Error::format(Field::Start))?,
            end: parse_time_of_day(end).map_err(Error::format(Field::End))?,
            weekdays: parse_weekday_set(weekdays).map_err(Error::format(Field::Weekdays))?,
        })
    }

    /// Whether the window starts and ends on the same calendar date.
    #[must_use]
    pub const fn is_same_day(&self) -> bool {
        self.start.minute_of_day() <= self.end.minute_of_day()
    }

    /// Concrete instants of the window occurrence relevant to `now`.
    ///
    /// # Panics
    ///
    /// When an instant falls outside the range supported by [`chrono`],
    /// see [`WindowSpec::checked_instants`].
    pub fn instants<Tz>(&self, now: DateTime<Tz>) -> WindowInstants<Tz>
    where
        Tz: TimeZone,
        DateTime<Tz>: Copy,
    {
        self.checked_instants(now).expect("the window should fit into the supported date range")
    }

    /// Concrete instants of the window occurrence relevant to `now`,
    /// or [`None`] when one of them falls outside the supported date range.
    pub fn checked_instants<Tz>(&self, now: DateTime<Tz>) -> Option<WindowInstants<Tz>>
    where
        Tz: TimeZone,
        DateTime<Tz>: Copy,
    {
        let today = now.date_naive();
        let tz = now.timezone();

        let start = self.skip_inactive_days(combine(today, self.start, &tz))?;
        let end = {
            // Skip days based on today, so that the end trails the start by the same offset:
            let end = self.skip_inactive_days(combine(today, self.end, &tz))?;
            if self.is_same_day() { end } else { end.checked_add_signed(TimeDelta::days(1))? }
        };
        let next_start = self.skip_inactive_days(start.checked_add_signed(TimeDelta::days(1))?)?;

        Some(WindowInstants { start, end, next_start })
    }

    /// # Panics
    ///
    /// When an instant falls outside the range supported by [`chrono`],
    /// see [`WindowSpec::checked_evaluate`].
    pub fn evaluate<Tz>(&self, now: DateTime<Tz>) -> WindowResult
    where
        Tz: TimeZone,
        DateTime<Tz>: Copy,
    {
        self.checked_evaluate(now).expect("the window should fit into the supported date range")
    }

    pub fn checked_evaluate<Tz>(&self, now: DateTime<Tz>) -> Option<WindowResult>
    where
        Tz: TimeZone,
        DateTime<Tz>: Copy,
    {
        let Some(instants) = self.checked_instants(now) else {
            trace!(?now, "out of range");
            return None;
        };
        let result = instants.classify(now);
        trace!(
            ?now,
            start = ?instants.start,
            end = ?instants.end,
            next_start = ?instants.next_start,
            result.is_within,
            "evaluated",
        );
        Some(result)
    }

    fn skip_inactive_days<Tz>(&self, timestamp: DateTime<Tz>) -> Option<DateTime<Tz>>
    where
        Tz: TimeZone,
        DateTime<Tz>: Copy,
    {
        let weekday = Weekday::from(timestamp.weekday());
        if self.weekdays.contains(weekday) {
            Some(timestamp)
        } else {
            let n_days = self.weekdays.days_until_next_active_weekday(weekday);
            timestamp.checked_add_signed(TimeDelta::days(i64::from(n_days)))
        }
    }
}

/// Evaluate the window at `now`.
///
/// # Panics
///
/// When an instant falls outside the range supported by [`chrono`].
pub fn evaluate<Tz>(now: DateTime<Tz>, spec: &WindowSpec) -> WindowResult
where
    Tz: TimeZone,
    DateTime<Tz>: Copy,
{
    spec.evaluate(now)
}

/// Start, end, and the following start of a window occurrence.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct WindowInstants<Tz: TimeZone> {
    /// Inclusive.
    pub start: DateTime<Tz>,

    /// Exclusive.
    pub end: DateTime<Tz>,

    pub next_start: DateTime<Tz>,
}

impl<Tz> Copy for WindowInstants<Tz>
where
    Tz: TimeZone,
    DateTime<Tz>: Copy,
{
}

impl<Tz> WindowInstants<Tz>
where
    Tz: TimeZone,
    DateTime<Tz>: Copy,
{
    /// Classify `now` against the instants.
    ///
    /// ```text
    /// ----|-----[start------end)--------------[next_start----
    ///     N-->T                                   (outside)
    ///                 N------------------------>T  (within)
    ///                           N-------------->T  (outside)
    /// ```
    pub fn classify(self, now: DateTime<Tz>) -> WindowResult {
        match now.cmp(&self.start) {
            Ordering::Less => WindowResult::outside(self.start - now),
            Ordering::Equal => WindowResult::within(TimeDelta::zero(), self.end - now),
            Ordering::Greater if now < self.end => {
                WindowResult::within(self.next_start - now, self.end - now)
            }
            Ordering::Greater => WindowResult::outside(self.next_start - now),
        }
    }
}
