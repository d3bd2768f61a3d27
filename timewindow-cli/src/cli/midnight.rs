use clap::Parser;
use timewindow::until_next_midnight;

use crate::{
    cli::{AtArgs, now},
    fmt::FormattedDuration,
    prelude::*,
};

#[derive(Parser)]
pub struct MidnightArgs {
    #[clap(flatten)]
    at: AtArgs,
}

impl MidnightArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let until = match self.at.at {
            Some(at) => until_next_midnight(at),
            None => until_next_midnight(now()),
        }
        .context("there is no next midnight in the supported date range")?;
        info!(until = ?FormattedDuration(until), "calculated");
        println!("{}", FormattedDuration(until));
        Ok(())
    }
}
