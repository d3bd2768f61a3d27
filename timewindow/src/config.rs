use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    error::{ConfigurationError, Error},
    window::WindowSpec,
};

/// Named windows, as read from a configuration file:
///
/// ```toml
/// [windows.business-hours]
/// start = "9:00"
/// end = "17:30"
/// weekdays = ["mon", "tue", "wed", "thu", "fri"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct WindowsConfig {
    #[serde(default)]
    windows: BTreeMap<String, WindowEntry>,
}

/// Raw window entry, kept as strings so that errors point at the failing field.
#[derive(Debug, Deserialize)]
struct WindowEntry {
    start: String,
    end: String,

    #[serde(default)]
    weekdays: Vec<String>,
}

impl WindowsConfig {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.windows.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Result<WindowSpec, Error> {
        let entry = self
            .windows
            .get(name)
            .ok_or_else(|| ConfigurationError::UnknownWindow(name.to_string()))?;
        WindowSpec::try_parse(&entry.start, &entry.end, &entry.weekdays).map_err(|error| {
            ConfigurationError::InvalidWindow { name: name.to_string(), source: Box::new(error) }
                .into()
        })
    }

    /// Parse all the windows, failing on the first invalid one.
    pub fn specs(&self) -> Result<BTreeMap<String, WindowSpec>, Error> {
        self.windows
            .keys()
            .map(|name| -> Result<_, Error> { Ok((name.clone(), self.get(name)?)) })
            .collect()
    }
}
