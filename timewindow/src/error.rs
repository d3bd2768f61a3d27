use std::num::ParseIntError;

/// Malformed textual input.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("invalid format (expected 12:34): `{0}`")]
    InvalidFormat(String),

    #[error("invalid format (expected 12:34): `{input}`: {source}")]
    InvalidNumber {
        input: String,

        #[source]
        source: ParseIntError,
    },

    #[error("invalid hour: {0}")]
    HourOutOfRange(i64),

    #[error("invalid minute: {0}")]
    MinuteOutOfRange(i64),

    #[error("unrecognized weekday: `{0}`")]
    UnrecognizedWeekday(String),
}

impl FormatError {
    /// Whether the input did not look like `HH:MM` at all, as opposed to carrying an out-of-range value.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::InvalidFormat(_) | Self::InvalidNumber { .. })
    }
}

/// Structurally invalid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("window `{0}` is not configured")]
    UnknownWindow(String),

    #[error("window `{name}` is invalid")]
    InvalidWindow {
        name: String,

        #[source]
        source: Box<Error>,
    },
}

/// Part of a window specification, used to pinpoint parsing failures.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Field {
    #[display("start")]
    Start,

    #[display("end")]
    End,

    #[display("weekdays")]
    Weekdays,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{field}: {source}")]
    Format {
        field: Field,

        #[source]
        source: FormatError,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl Error {
    pub fn format(field: Field) -> impl FnOnce(FormatError) -> Self {
        move |source| Self::Format { field, source }
    }
}
