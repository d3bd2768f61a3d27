mod check;
mod midnight;

use chrono::{DateTime, FixedOffset, Local, Timelike};
use clap::{Parser, Subcommand};

pub use self::{check::CheckArgs, midnight::MidnightArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether an instant falls into the window, and when that changes.
    #[clap(name = "check")]
    Check(Box<CheckArgs>),

    /// Show the time left until the next midnight.
    #[clap(name = "midnight")]
    Midnight(MidnightArgs),
}

#[derive(Parser)]
pub struct AtArgs {
    /// Use this instant instead of the current time, for example: `2025-11-17T09:00:00+01:00`.
    #[clap(long = "at", env = "WINDOW_AT")]
    pub at: Option<DateTime<FixedOffset>>,
}

/// Current local time, truncated to whole seconds.
pub fn now() -> DateTime<Local> {
    let now = Local::now();
    now.with_nanosecond(0).unwrap_or(now)
}
