use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::model::continent::Continent;
use crate::model::stats::ContinentStats;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("round has no questions")]
    EmptyRound,

    #[error("recorded attempts ({recorded}) do not match round length ({expected})")]
    AttemptMismatch { expected: u32, recorded: u32 },

    #[error("score ({score}) does not match per-continent correct counts ({sum})")]
    ScoreMismatch { score: u32, sum: u32 },
}

//
// ─── MESSAGE TIER ──────────────────────────────────────────────────────────────
//

/// Result message band, one per 10% of the final percentage.
///
/// `Perfect` is reserved for exactly 100%; every other band covers a ten-point
/// range down to `Speechless` below 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MessageTier {
    Perfect,
    Excellent,
    VeryGood,
    Good,
    SoSo,
    Weak,
    Bad,
    VeryBad,
    Horrible,
    Terrible,
    Speechless,
}

impl MessageTier {
    /// Band for a final percentage in `0..=100`.
    #[must_use]
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => MessageTier::Perfect,
            90..=99 => MessageTier::Excellent,
            80..=89 => MessageTier::VeryGood,
            70..=79 => MessageTier::Good,
            60..=69 => MessageTier::SoSo,
            50..=59 => MessageTier::Weak,
            40..=49 => MessageTier::Bad,
            30..=39 => MessageTier::VeryBad,
            20..=29 => MessageTier::Horrible,
            10..=19 => MessageTier::Terrible,
            _ => MessageTier::Speechless,
        }
    }

    /// Player-facing message for this band.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            MessageTier::Perfect => "Perfect! (Legendary Level!)",
            MessageTier::Excellent => "Excellent! (Almost flawless!)",
            MessageTier::VeryGood => "Very Good! (Keep it up!)",
            MessageTier::Good => "Good! (On the right track)",
            MessageTier::SoSo => "So-so... (Barely passing)",
            MessageTier::Weak => "Weak! (Need to push harder)",
            MessageTier::Bad => "Bad! (Rethink your strategy)",
            MessageTier::VeryBad => "Very Bad! (Red alert!)",
            MessageTier::Horrible => "Horrible! (Can't even describe it...)",
            MessageTier::Terrible => "Terrible! (Total disaster)",
            MessageTier::Speechless => "Speechless! (What happened here?)",
        }
    }
}

impl fmt::Display for MessageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

//
// ─── FINAL REPORT ──────────────────────────────────────────────────────────────
//

/// One row of the per-continent breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinentBreakdown {
    pub continent: Continent,
    pub correct: u32,
    pub total: u32,
    pub percentage: u32,
}

/// Final result of a completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalReport {
    percentage: u32,
    per_continent: Vec<ContinentBreakdown>,
    message_tier: MessageTier,
}

impl FinalReport {
    /// Build the report for a finished round of `round_length` questions.
    ///
    /// Continents that were sampled but never shown (total of zero) are
    /// omitted from the breakdown.
    ///
    /// # Errors
    ///
    /// Returns `ReportError` when the counters do not reconcile: the round
    /// was empty, the recorded attempts do not sum to `round_length`, or the
    /// score disagrees with the per-continent correct counts.
    pub fn from_stats(
        score: u32,
        round_length: u32,
        stats: &ContinentStats,
    ) -> Result<Self, ReportError> {
        if round_length == 0 {
            return Err(ReportError::EmptyRound);
        }

        let recorded = stats.total_attempts();
        if recorded != round_length {
            return Err(ReportError::AttemptMismatch {
                expected: round_length,
                recorded,
            });
        }

        let sum = stats.total_correct();
        if sum != score {
            return Err(ReportError::ScoreMismatch { score, sum });
        }

        let ratio = f64::from(score) / f64::from(round_length);
        let percentage = (ratio * 100.0).round() as u32;

        let per_continent = stats
            .iter()
            .filter(|(_, stat)| stat.total() > 0)
            .map(|(continent, stat)| ContinentBreakdown {
                continent,
                correct: stat.correct(),
                total: stat.total(),
                percentage: stat.percentage(),
            })
            .collect();

        Ok(Self {
            percentage,
            per_continent,
            message_tier: MessageTier::for_percentage(percentage),
        })
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn per_continent(&self) -> &[ContinentBreakdown] {
        &self.per_continent
    }

    #[must_use]
    pub fn message_tier(&self) -> MessageTier {
        self.message_tier
    }

    /// Player-facing message for the final percentage.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message_tier.message()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
