use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::continent::{Continent, ContinentParseError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountryError {
    #[error("country code cannot be empty")]
    EmptyCode,

    #[error("country name cannot be empty")]
    EmptyName,

    #[error("country {name} has no capital")]
    EmptyCapital { name: String },

    #[error("country {name} has no cities")]
    NoCities { name: String },

    #[error("country {name} has a blank city entry")]
    BlankCity { name: String },

    #[error(transparent)]
    UnknownContinent(#[from] ContinentParseError),
}

//
// ─── COUNTRY ───────────────────────────────────────────────────────────────────
//

/// Raw country record as supplied by the dataset collaborator.
///
/// The continent arrives as its display string and is parsed during
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDraft {
    pub code: String,
    pub name: String,
    pub continent: String,
    pub capital: String,
    pub cities: Vec<String>,
}

impl CountryDraft {
    /// Validate the draft into a well-formed `Country`.
    ///
    /// # Errors
    ///
    /// Returns `CountryError` for a missing field, an empty city list, or an
    /// unknown continent name.
    pub fn validate(self) -> Result<Country, CountryError> {
        let continent: Continent = self.continent.parse()?;
        Country::new(self.code, self.name, continent, self.capital, self.cities)
    }
}

/// Immutable country record used for question generation.
///
/// `cities` is ordered by prominence: `cities[0]` is the most notable city.
/// The capital may or may not appear in the list, and may or may not be the
/// most notable city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    code: String,
    name: String,
    continent: Continent,
    capital: String,
    cities: Vec<String>,
}

impl Country {
    /// Create a validated country record.
    ///
    /// # Errors
    ///
    /// Returns `CountryError` if the code, name, or capital is blank, or if
    /// the city list is empty or contains a blank entry.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        continent: Continent,
        capital: impl Into<String>,
        cities: Vec<String>,
    ) -> Result<Self, CountryError> {
        let code = code.into();
        let name = name.into();
        let capital = capital.into();

        if code.trim().is_empty() {
            return Err(CountryError::EmptyCode);
        }
        if name.trim().is_empty() {
            return Err(CountryError::EmptyName);
        }
        if capital.trim().is_empty() {
            return Err(CountryError::EmptyCapital { name });
        }
        if cities.is_empty() {
            return Err(CountryError::NoCities { name });
        }
        if cities.iter().any(|city| city.trim().is_empty()) {
            return Err(CountryError::BlankCity { name });
        }

        Ok(Self {
            code,
            name,
            continent,
            capital,
            cities,
        })
    }

    /// ISO country code; the UI derives flag image URLs from it.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn continent(&self) -> Continent {
        self.continent
    }

    #[must_use]
    pub fn capital(&self) -> &str {
        &self.capital
    }

    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Most notable city of the country (`cities[0]`, non-empty by
    /// construction).
    #[must_use]
    pub fn notable_city(&self) -> &str {
        &self.cities[0]
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
