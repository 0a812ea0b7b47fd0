use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::continent::Continent;

/// Attempt/correct counters for one continent within a round.
///
/// `correct` never exceeds `total`: an attempt is recorded when a question is
/// shown, a correct mark only after its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContinentStat {
    correct: u32,
    total: u32,
}

impl ContinentStat {
    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Accuracy as a rounded percentage; 0 when nothing was attempted.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let ratio = f64::from(self.correct) / f64::from(self.total);
        (ratio * 100.0).round() as u32
    }
}

/// Per-continent accuracy counters for the current round.
///
/// Backed by an ordered map so iteration yields continents alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContinentStats {
    entries: BTreeMap<Continent, ContinentStat>,
}

impl ContinentStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a zeroed entry exists for the continent.
    pub fn track(&mut self, continent: Continent) {
        self.entries.entry(continent).or_default();
    }

    /// Count one shown question for the continent.
    pub fn record_attempt(&mut self, continent: Continent) {
        let stat = self.entries.entry(continent).or_default();
        stat.total = stat.total.saturating_add(1);
    }

    /// Count one correct answer for the continent.
    ///
    /// Only takes effect while `correct < total`, keeping the counters
    /// consistent even against misuse.
    pub fn record_correct(&mut self, continent: Continent) {
        let stat = self.entries.entry(continent).or_default();
        if stat.correct < stat.total {
            stat.correct += 1;
        }
    }

    #[must_use]
    pub fn get(&self, continent: Continent) -> Option<ContinentStat> {
        self.entries.get(&continent).copied()
    }

    /// Sum of attempts across all continents.
    #[must_use]
    pub fn total_attempts(&self) -> u32 {
        self.entries.values().map(ContinentStat::total).sum()
    }

    /// Sum of correct answers across all continents.
    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.entries.values().map(ContinentStat::correct).sum()
    }

    /// Iterate entries in alphabetical continent order.
    pub fn iter(&self) -> impl Iterator<Item = (Continent, ContinentStat)> + '_ {
        self.entries.iter().map(|(c, s)| (*c, *s))
    }
}
