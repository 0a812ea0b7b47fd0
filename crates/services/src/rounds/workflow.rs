use quiz_core::model::{Country, CountryDraft};

use crate::error::RoundError;
use crate::Clock;

use super::service::{AnswerOutcome, RoundAdvance, RoundService};

/// Default number of questions per round.
pub const DEFAULT_ROUND_LENGTH: usize = 20;

/// Result of answering the current question in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub outcome: AnswerOutcome,
    pub is_complete: bool,
}

/// Orchestrates round creation for the UI: validates the dataset, stamps
/// timestamps from its clock, and hands back a ready `RoundService`.
///
/// Restarting simply discards the old round and starts a new one.
#[derive(Debug, Clone)]
pub struct RoundLoopService {
    clock: Clock,
    round_length: usize,
}

impl RoundLoopService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            round_length: DEFAULT_ROUND_LENGTH,
        }
    }

    #[must_use]
    pub fn with_round_length(mut self, round_length: usize) -> Self {
        self.round_length = round_length;
        self
    }

    #[must_use]
    pub fn round_length(&self) -> usize {
        self.round_length
    }

    /// Validate the full dataset eagerly and start a round over it.
    ///
    /// A malformed record anywhere in the dataset prevents the round from
    /// beginning at all, rather than surfacing mid-round.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Country` for the first malformed record, or a
    /// configuration error when the dataset is smaller than the round.
    pub fn start_round(&self, dataset: &[CountryDraft]) -> Result<RoundService, RoundError> {
        let countries = dataset
            .iter()
            .cloned()
            .map(CountryDraft::validate)
            .collect::<Result<Vec<Country>, _>>()?;

        RoundService::start(&countries, self.round_length, self.clock.now())
    }

    /// Answer the current question, pairing the outcome with the round's
    /// completion state for UI consumption.
    ///
    /// Returns `None` without side effects when the question was already
    /// answered or the round has ended, matching `RoundService::submit_answer`.
    pub fn answer_current(
        &self,
        round: &mut RoundService,
        selected: &str,
    ) -> Option<AnswerResult> {
        let outcome = round.submit_answer(selected)?;
        Some(AnswerResult {
            outcome,
            is_complete: round.is_complete(),
        })
    }

    /// Advance the round using this service's clock for the completion
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::NoAnswer` when the current question is still
    /// unanswered.
    pub fn advance(&self, round: &mut RoundService) -> Result<RoundAdvance, RoundError> {
        round.advance(self.clock.now())
    }
}
