use std::fmt::{Debug, Display, Formatter};

use chrono::TimeDelta;

/// Human-readable duration, like `6h 30m`.
pub struct FormattedDuration(pub TimeDelta);

impl Debug for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Only non-negative durations get displayed:
        let duration = self.0.to_std().unwrap_or_default();
        write!(f, "{}", humantime::format_duration(duration))
    }
}
