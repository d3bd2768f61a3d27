use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    str::FromStr,
};

use enumset::EnumSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Day of the week, numbered from Sunday.
///
/// The numbering decides which day comes «next» when wrapping around the week,
/// so the variant order must stay as is.
#[derive(Debug, Hash, Ord, PartialOrd, derive_more::Display, enumset::EnumSetType)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const DAYS_PER_WEEK: u32 = 7;

    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => Self::Sun,
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
        }
    }
}

impl FromStr for Weekday {
    type Err = FormatError;

    /// Match full names and the common abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" | "su" => Ok(Self::Sunday),
            "monday" | "mon" | "mo" => Ok(Self::Monday),
            "tuesday" | "tues" | "tue" | "tu" => Ok(Self::Tuesday),
            "wednesday" | "wed" | "we" => Ok(Self::Wednesday),
            "thursday" | "thurs" | "thur" | "thu" | "th" => Ok(Self::Thursday),
            "friday" | "fri" | "fr" => Ok(Self::Friday),
            "saturday" | "sat" | "sa" => Ok(Self::Saturday),
            _ => Err(FormatError::UnrecognizedWeekday(s.to_string())),
        }
    }
}

/// Days on which a window is active.
///
/// An empty set imposes no restriction: every day is active.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    Serialize,
    derive_more::From,
    derive_more::Into,
)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
#[must_use]
pub struct WeekdaySet(EnumSet<Weekday>);

impl WeekdaySet {
    pub const EMPTY: Self = Self(EnumSet::empty());

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        self.0.contains(weekday)
    }

    /// Active days in ascending order, starting from Sunday.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        self.0.iter()
    }

    /// Next active day after `today`.
    ///
    /// Picks the smallest active day strictly after `today`, or wraps around to the first
    /// active day of the week. When `today` is the only active day, that is `today` itself,
    /// meaning «a week from today».
    ///
    /// Returns [`None`] for an empty set.
    #[must_use]
    pub fn next_active_weekday(self, today: Weekday) -> Option<Weekday> {
        let first = self.iter().next()?;
        Some(self.iter().find(|weekday| *weekday > today).unwrap_or(first))
    }

    /// Number of days from `today` until [`Self::next_active_weekday`], in `0..=7`.
    ///
    /// Zero means there is no restriction and nothing should be skipped.
    #[must_use]
    pub fn days_until_next_active_weekday(self, today: Weekday) -> u32 {
        let Some(next) = self.next_active_weekday(today) else {
            return 0;
        };
        match next.cmp(&today) {
            Ordering::Greater => next.ordinal() - today.ordinal(),
            Ordering::Less => (Weekday::DAYS_PER_WEEK - today.ordinal()) + next.ordinal(),
            Ordering::Equal => Weekday::DAYS_PER_WEEK,
        }
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for WeekdaySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() { write!(f, "every day") } else { write!(f, "{}", self.iter().join(", ")) }
    }
}

impl TryFrom<Vec<String>> for WeekdaySet {
    type Error = FormatError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        parse_weekday_set(names)
    }
}

impl From<WeekdaySet> for Vec<String> {
    fn from(weekdays: WeekdaySet) -> Self {
        weekdays.iter().map(|weekday| weekday.to_string()).collect()
    }
}

/// Parse weekday names into a set, failing on the first unrecognized name.
pub fn parse_weekday_set<I>(names: I) -> Result<WeekdaySet, FormatError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names.into_iter().map(|name| name.as_ref().parse::<Weekday>()).collect()
}

#[cfg(test)]
mod tests {
    use enumset::enum_set;

    use super::*;

    fn set(weekdays: EnumSet<Weekday>) -> WeekdaySet {
        WeekdaySet::from(weekdays)
    }

    #[test]
    fn test_empty() {
        assert_eq!(WeekdaySet::EMPTY.next_active_weekday(Weekday::Thursday), None);
        assert_eq!(WeekdaySet::EMPTY.days_until_next_active_weekday(Weekday::Thursday), 0);
        assert_eq!(WeekdaySet::EMPTY.days_until_next_active_weekday(Weekday::Sunday), 0);
    }

    #[test]
    fn test_beginning() {
        let weekdays = set(enum_set!(Weekday::Wednesday | Weekday::Thursday));
        assert_eq!(weekdays.next_active_weekday(Weekday::Tuesday), Some(Weekday::Wednesday));
        assert_eq!(weekdays.days_until_next_active_weekday(Weekday::Tuesday), 1);
    }

    #[test]
    fn test_middle() {
        let weekdays = set(enum_set!(Weekday::Monday | Weekday::Wednesday | Weekday::Thursday));
        assert_eq!(weekdays.next_active_weekday(Weekday::Tuesday), Some(Weekday::Wednesday));
        assert_eq!(weekdays.days_until_next_active_weekday(Weekday::Tuesday), 1);
    }

    #[test]
    fn test_middle_match() {
        let weekdays = set(enum_set!(Weekday::Monday | Weekday::Wednesday | Weekday::Thursday));
        assert_eq!(weekdays.next_active_weekday(Weekday::Wednesday), Some(Weekday::Thursday));
        assert_eq!(weekdays.days_until_next_active_weekday(Weekday::Wednesday), 1);
    }

    #[test]
    fn test_wrap_around() {
        let weekdays = set(enum_set!(Weekday::Monday | Weekday::Wednesday | Weekday::Thursday));
        assert_eq!(weekdays.next_active_weekday(Weekday::Friday), Some(Weekday::Monday));
        assert_eq!(weekdays.days_until_next_active_weekday(Weekday::Friday), 3);
    }

    #[test]
    fn test_wrap_around_from_last_active_day() {
        let weekdays = set(enum_set!(Weekday::Monday | Weekday::Thursday));
        assert_eq!(weekdays.next_active_weekday(Weekday::Thursday), Some(Weekday::Monday));
        assert_eq!(weekdays.days_until_next_active_weekday(Weekday::Thursday), 4);
    }

    #[test]
    fn test_wrap_around_to_sunday() {
        let weekdays = set(enum_set!(Weekday::Sunday | Weekday::Tuesday));
        assert_eq!(weekdays.next_active_weekday(Weekday::Saturday), Some(Weekday::Sunday));
        assert_eq!(weekdays.days_until_next_active_weekday(Weekday::Saturday), 1);
    }

    #[test]
    fn test_self_match() {
        let weekdays = set(enum_set!(Weekday::Tuesday));
        assert_eq!(weekdays.next_active_weekday(Weekday::Tuesday), Some(Weekday::Tuesday));
        assert_eq!(weekdays.days_until_next_active_weekday(Weekday::Tuesday), 7);
    }

    #[test]
    fn test_days_until_stays_within_week() {
        for weekdays in [
            set(enum_set!(Weekday::Sunday)),
            set(enum_set!(Weekday::Saturday)),
            set(enum_set!(Weekday::Monday | Weekday::Friday)),
            set(EnumSet::all()),
        ] {
            for today in EnumSet::<Weekday>::all() {
                let days = weekdays.days_until_next_active_weekday(today);
                assert!((1..=7).contains(&days), "{weekdays} from {today}: {days}");
            }
        }
    }

    #[test]
    fn test_parse_full_names() -> Result<(), FormatError> {
        let weekdays = parse_weekday_set([
            "monday", "Tuesday", "wedNesday", "Thursday", "FRIDAY", "SATurDAY", "sUNDAY",
        ])?;
        assert_eq!(weekdays, set(EnumSet::all()));
        Ok(())
    }

    #[test]
    fn test_parse_short_names() -> Result<(), FormatError> {
        let weekdays = parse_weekday_set(["mo", "Tu", "We", "Th", "Fr", "Sa", "SU"])?;
        assert_eq!(weekdays, set(EnumSet::all()));
        let weekdays = parse_weekday_set(["mon", "Tues", "Thurs", " thur ", "thu"])?;
        assert_eq!(weekdays, set(enum_set!(Weekday::Monday | Weekday::Tuesday | Weekday::Thursday)));
        Ok(())
    }

    #[test]
    fn test_parse_duplicates_collapse() -> Result<(), FormatError> {
        let weekdays = parse_weekday_set(["sat", "Saturday", "sa"])?;
        assert_eq!(weekdays.iter().collect_vec(), [Weekday::Saturday]);
        Ok(())
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(
            parse_weekday_set(["Tue", "not-a-day"]),
            Err(FormatError::UnrecognizedWeekday("not-a-day".into())),
        );
        let error = parse_weekday_set([""]).unwrap_err();
        assert!(error.to_string().contains("unrecognized"));
    }

    #[test]
    fn test_chrono_round_trip() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(chrono::Weekday::from(Weekday::Saturday), chrono::Weekday::Sat);
        assert_eq!(Weekday::from(chrono::Weekday::Wed).ordinal(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(WeekdaySet::EMPTY.to_string(), "every day");
        assert_eq!(
            set(enum_set!(Weekday::Friday | Weekday::Monday)).to_string(),
            "Monday, Friday",
        );
    }
}
