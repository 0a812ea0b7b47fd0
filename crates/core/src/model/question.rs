use serde::Serialize;

use crate::model::country::Country;

/// One multiple-choice step of a round.
///
/// `options` holds the capital plus up to five distractor cities in the
/// shuffled presentation order. A question is replaced, never mutated, when
/// the round advances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub country: Country,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl Question {
    /// Compares a selected option against the correct answer, exact match.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_answer == selected
    }

    /// Number of options presented, including the correct answer.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
