use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};
use clap::Parser;
use timewindow::{TimeOfDay, Weekday, WindowSpec, WindowsConfig};

use crate::{
    cli::{AtArgs, now},
    prelude::*,
    tables::build_window_table,
};

#[derive(Parser)]
pub struct CheckArgs {
    #[clap(flatten)]
    window: WindowArgs,

    #[clap(flatten)]
    at: AtArgs,
}

impl CheckArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let (name, spec) = self.window.resolve()?;
        info!(%name, start = %spec.start, end = %spec.end, weekdays = %spec.weekdays, "resolved");
        match self.at.at {
            Some(at) => check(&name, &spec, at),
            None => check(&name, &spec, now()),
        }
    }
}

fn check<Tz>(name: &str, spec: &WindowSpec, now: DateTime<Tz>) -> Result
where
    Tz: TimeZone,
    Tz::Offset: Display,
    DateTime<Tz>: Copy,
{
    let instants = spec
        .checked_instants(now)
        .with_context(|| format!("`{name}` does not fit into the supported date range at {now}"))?;
    let result = instants.classify(now);
    info!(%now, result.is_within, "evaluated");
    println!("{}", build_window_table(name, spec, instants, result));
    Ok(())
}

#[derive(Parser)]
pub struct WindowArgs {
    /// Window start, `HH:MM`.
    #[clap(long, env = "WINDOW_START")]
    start: Option<TimeOfDay>,

    /// Window end, `HH:MM`. The window crosses midnight when the end is before the start.
    #[clap(long, env = "WINDOW_END")]
    end: Option<TimeOfDay>,

    /// Days of the week on which the window is active. Every day when omitted.
    #[clap(long, env = "WINDOW_WEEKDAYS", value_delimiter = ',', num_args = 1..)]
    weekdays: Vec<Weekday>,

    /// TOML file with named windows, used instead of `--start` and `--end`.
    #[clap(long, env = "WINDOW_CONFIG")]
    config: Option<PathBuf>,

    /// Window name in the configuration file.
    #[clap(long = "window", env = "WINDOW_NAME")]
    name: Option<String>,
}

impl WindowArgs {
    fn resolve(&self) -> Result<(String, WindowSpec)> {
        if let Some(path) = &self.config {
            let name = self.name.as_deref().context("`--window` is required with `--config`")?;
            let config = read_config(path)?;
            let spec = config.get(name).with_context(|| {
                format!("available windows: {:?}", config.names().collect::<Vec<_>>())
            })?;
            Ok((name.to_string(), spec))
        } else {
            let spec = WindowSpec::builder()
                .start(self.start.context("`--start` is required without `--config`")?)
                .end(self.end.context("`--end` is required without `--config`")?)
                .weekdays(self.weekdays.iter().copied().collect())
                .build();
            Ok((self.name.clone().unwrap_or_else(|| "window".to_string()), spec))
        }
    }
}

#[instrument(skip_all, fields(path = %path.display()))]
fn read_config(path: &Path) -> Result<WindowsConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let config: WindowsConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;
    debug!(n_windows = config.names().count(), "loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::{TimeDelta, Utc};

    use super::*;

    fn parse(args: &[&str]) -> CheckArgs {
        CheckArgs::try_parse_from(std::iter::once("check").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_resolve_from_arguments() -> Result {
        let args = parse(&["--start", "22:00", "--end", "3:00", "--weekdays", "fri,sat"]);
        let (name, spec) = args.window.resolve()?;
        assert_eq!(name, "window");
        assert!(!spec.is_same_day());
        assert!(spec.weekdays.contains(Weekday::Friday));
        assert!(spec.weekdays.contains(Weekday::Saturday));
        assert!(!spec.weekdays.contains(Weekday::Sunday));

        let now = Utc.with_ymd_and_hms(2000, 1, 1, 23, 0, 0).unwrap();
        assert_eq!(spec.evaluate(now).time_to_end, TimeDelta::hours(4));
        Ok(())
    }

    #[test]
    fn test_check_out_of_range() -> Result {
        let (name, spec) = parse(&["--start", "10:00", "--end", "20:00"]).window.resolve()?;
        let error = check(&name, &spec, DateTime::<Utc>::MAX_UTC).unwrap_err();
        assert!(error.to_string().contains("supported date range"), "{error:#}");
        Ok(())
    }

    #[test]
    fn test_invalid_start() {
        let args = std::iter::once("check").chain(["--start", "25:00", "--end", "3:00"]);
        assert!(CheckArgs::try_parse_from(args).is_err());
    }

    #[test]
    fn test_missing_end() {
        let args = parse(&["--start", "22:00"]);
        assert!(args.window.resolve().is_err());
    }

    #[test]
    fn test_resolve_from_config() -> Result {
        let path = std::env::temp_dir().join(format!("timewindow-{}.toml", std::process::id()));
        {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "[windows.lunch]\nstart = \"12:00\"\nend = \"13:00\"\nweekdays = [\"mon\"]")?;
        }
        let path_str = path.to_str().context("non-UTF-8 temporary path")?;

        let lunch = parse(&["--config", path_str, "--window", "lunch"]).window.resolve();
        let dinner = parse(&["--config", path_str, "--window", "dinner"]).window.resolve();
        let unnamed = parse(&["--config", path_str]).window.resolve();
        fs::remove_file(&path)?;

        let (name, spec) = lunch?;
        assert_eq!(name, "lunch");
        assert_eq!(spec.start, TimeOfDay::try_new(12, 0)?);
        assert!(dinner.is_err());
        assert!(unnamed.is_err());
        Ok(())
    }
}
