use chrono::{DateTime, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone};

use crate::time_of_day::TimeOfDay;

/// Place the time of day on the date, in the time zone.
///
/// Ambiguous local times resolve to the earliest instant. Local times skipped by a transition
/// are shifted forward by the gap.
pub fn combine<Tz: TimeZone>(date: NaiveDate, time: TimeOfDay, tz: &Tz) -> DateTime<Tz> {
    let local = date.and_time(NaiveTime::from(time));
    match tz.from_local_datetime(&local) {
        LocalResult::Single(timestamp) | LocalResult::Ambiguous(timestamp, _) => timestamp,
        LocalResult::None => {
            let offset_before = tz.offset_from_utc_datetime(&(local - TimeDelta::days(1))).fix();
            tz.from_utc_datetime(
                &(local - TimeDelta::seconds(i64::from(offset_before.local_minus_utc()))),
            )
        }
    }
}

/// Time until the start of the next calendar day in the time zone of `now`,
/// or [`None`] on the last date supported by [`chrono`].
#[must_use]
pub fn until_next_midnight<Tz>(now: DateTime<Tz>) -> Option<TimeDelta>
where
    Tz: TimeZone,
    DateTime<Tz>: Copy,
{
    let tomorrow = now.date_naive().succ_opt()?;
    Some(combine(tomorrow, TimeOfDay::MIDNIGHT, &now.timezone()) - now)
}
