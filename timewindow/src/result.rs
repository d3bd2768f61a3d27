use chrono::TimeDelta;

/// Outcome of evaluating a window at some instant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct WindowResult {
    pub is_within: bool,

    /// Time until the next start of the window.
    ///
    /// Zero exactly at the start.
    pub time_to_start: TimeDelta,

    /// Time until the current occurrence ends.
    ///
    /// Only populated while within the window, zero otherwise.
    pub time_to_end: TimeDelta,
}

impl WindowResult {
    pub const fn outside(time_to_start: TimeDelta) -> Self {
        Self { is_within: false, time_to_start, time_to_end: TimeDelta::zero() }
    }

    pub const fn within(time_to_start: TimeDelta, time_to_end: TimeDelta) -> Self {
        Self { is_within: true, time_to_start, time_to_end }
    }

    /// Time until [`Self::is_within`] flips.
    #[must_use]
    pub const fn time_to_next_change(self) -> TimeDelta {
        if self.is_within { self.time_to_end } else { self.time_to_start }
    }
}
