use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown continent: {0}")]
pub struct ContinentParseError(pub String);

/// The six inhabited continents used by the country dataset.
///
/// Variant order matches the alphabetical order of the display names, so
/// ordered iteration over continent-keyed maps yields alphabetical reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Continent {
    type Err = ContinentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Africa" => Ok(Continent::Africa),
            "Asia" => Ok(Continent::Asia),
            "Europe" => Ok(Continent::Europe),
            "North America" => Ok(Continent::NorthAmerica),
            "Oceania" => Ok(Continent::Oceania),
            "South America" => Ok(Continent::SouthAmerica),
            other => Err(ContinentParseError(other.to_string())),
        }
    }
}
