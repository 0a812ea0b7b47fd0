use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{ContinentStats, Country};

use crate::error::RoundError;

/// Selection result for a round build.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundPlan {
    pub countries: Vec<Country>,
    pub stats: ContinentStats,
}

// Plan helpers are currently used only in tests and planned UI flows.
#[allow(dead_code)]
impl RoundPlan {
    /// Number of questions this plan will produce.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Samples a fixed-size subset of countries for one round.
///
/// Uses a uniform shuffle (Fisher–Yates via `rand`) followed by truncation,
/// so every subset and every ordering of it is equally likely. Because the
/// order is uniform too, the plan can be consumed sequentially.
#[derive(Debug, Clone, Copy)]
pub struct RoundSampler {
    length: usize,
}

impl RoundSampler {
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Pick `length` distinct countries without replacement and initialize a
    /// zeroed stat entry for every continent in the sample.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::InvalidLength` for a zero length and
    /// `RoundError::NotEnoughCountries` when the pool is too small.
    pub fn sample(&self, countries: &[Country]) -> Result<RoundPlan, RoundError> {
        if self.length == 0 {
            return Err(RoundError::InvalidLength);
        }
        if self.length > countries.len() {
            return Err(RoundError::NotEnoughCountries {
                requested: self.length,
                available: countries.len(),
            });
        }

        let mut pool: Vec<Country> = countries.to_vec();
        let mut rng = rng();
        pool.as_mut_slice().shuffle(&mut rng);
        pool.truncate(self.length);

        let mut stats = ContinentStats::new();
        for country in &pool {
            stats.track(country.continent());
        }

        Ok(RoundPlan {
            countries: pool,
            stats,
        })
    }
}
