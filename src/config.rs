//! Supported cities and where their trip data lives.

use crate::error::{BikeshareError, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    #[value(name = "new-york-city", aliases = ["new york city", "nyc"])]
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Case-insensitive lookup by name or alias.
    pub fn parse(name: &str) -> Option<City> {
        City::from_str(name.trim(), true).ok()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            City::Chicago => write!(f, "Chicago"),
            City::NewYorkCity => write!(f, "New York City"),
            City::Washington => write!(f, "Washington"),
        }
    }
}

/// Maps each city to its CSV file under a data directory.
///
/// Override files are a plain JSON object keyed by city name:
/// ```json
/// {
///   "chicago": "chicago_2017.csv",
///   "new york city": "/mnt/data/nyc.csv"
/// }
/// ```
/// Relative file names resolve against the data directory; absolute ones are
/// used as-is.
#[derive(Debug, Clone)]
pub struct CityConfig {
    data_dir: PathBuf,
    files: BTreeMap<City, String>,
}

impl CityConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let files = City::ALL
            .iter()
            .map(|c| (*c, c.default_file().to_string()))
            .collect();
        Self {
            data_dir: data_dir.into(),
            files,
        }
    }

    /// Replaces the file names listed in the JSON file at `path`.
    pub fn load_overrides(mut self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BikeshareError::Config(format!("{}: {e}", path.display())))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| BikeshareError::Config(format!("{}: {e}", path.display())))?;

        for (name, file) in entries {
            let city = City::parse(&name)
                .ok_or_else(|| BikeshareError::Config(format!("unknown city {name:?}")))?;
            self.files.insert(city, file);
        }

        Ok(self)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn source_path(&self, city: City) -> PathBuf {
        let file = self
            .files
            .get(&city)
            .map(String::as_str)
            .unwrap_or_else(|| city.default_file());
        self.data_dir.join(file)
    }

    /// Iterates over all `(city, file)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (City, &str)> {
        self.files.iter().map(|(c, f)| (*c, f.as_str()))
    }
}
