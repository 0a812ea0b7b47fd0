use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use quiz_core::model::{ContinentStats, Country, FinalReport, Question};

use crate::error::RoundError;

use super::plan::RoundSampler;
use super::progress::RoundProgress;
use super::question::QuestionGenerator;

/// Outcome of answering the current question.
///
/// Carries the correct answer so the UI can highlight it regardless of what
/// was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
}

/// What the round produced when it advanced.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundAdvance {
    /// The next question; the round keeps going.
    Next(Question),
    /// The round is over. Repeated advances return the same cached report.
    Finished(FinalReport),
}

/// In-memory quiz round over a sampled set of countries.
///
/// Steps through the sample one flag at a time. Each question must be
/// answered exactly once before `advance` moves to the next one or ends the
/// round; duplicate answers are ignored. The round owns all mutable state:
/// collaborators only ever see values.
pub struct RoundService {
    countries: Vec<Country>,
    current: usize,
    score: u32,
    current_question: Option<Question>,
    answered: bool,
    stats: ContinentStats,
    generator: QuestionGenerator,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    final_report: Option<FinalReport>,
}

impl RoundService {
    /// Start a round of `length` questions over the given countries.
    ///
    /// Samples the pool, zeroes the score, and generates the first question,
    /// so a freshly started round is already awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::InvalidLength` or `RoundError::NotEnoughCountries`
    /// when the requested length cannot be satisfied; no round is created.
    pub fn start(
        countries: &[Country],
        length: usize,
        started_at: DateTime<Utc>,
    ) -> Result<Self, RoundError> {
        let plan = RoundSampler::new(length).sample(countries)?;

        let mut stats = plan.stats;
        let generator = QuestionGenerator::new();
        let first = generator.generate(&plan.countries[0], &mut stats);

        Ok(Self {
            countries: plan.countries,
            current: 0,
            score: 0,
            current_question: Some(first),
            answered: false,
            stats,
            generator,
            started_at,
            completed_at: None,
            final_report: None,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn stats(&self) -> &ContinentStats {
        &self.stats
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    /// Cached final report, present once the round has ended.
    #[must_use]
    pub fn final_report(&self) -> Option<&FinalReport> {
        self.final_report.as_ref()
    }

    /// Total number of questions in this round.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.countries.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.current + usize::from(self.answered)
    }

    /// Number of remaining questions, counting the current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.countries.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a summary of the current round progress.
    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        RoundProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Score the selected option against the current question.
    ///
    /// Returns `None` without any side effect when the question was already
    /// answered or the round has ended, so double-clicks and late events
    /// cannot score twice. Comparison is exact string equality; a correct
    /// answer bumps the score and the continent counter.
    pub fn submit_answer(&mut self, selected: &str) -> Option<AnswerOutcome> {
        if self.answered || self.is_complete() {
            return None;
        }
        let question = self.current_question.as_ref()?;

        self.answered = true;
        let correct = question.is_correct(selected);
        let correct_answer = question.correct_answer.clone();
        let continent = question.country.continent();

        if correct {
            self.score += 1;
            self.stats.record_correct(continent);
        }

        Some(AnswerOutcome {
            correct,
            correct_answer,
        })
    }

    /// Move past the answered question: either generate the next one or end
    /// the round and build the final report.
    ///
    /// `now` stamps `completed_at` when the round ends; after that, further
    /// calls return the cached report unchanged.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::NoAnswer` when the current question has not been
    /// answered yet; that is a caller bug, not a recoverable state.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<RoundAdvance, RoundError> {
        if let Some(report) = &self.final_report {
            return Ok(RoundAdvance::Finished(report.clone()));
        }
        if !self.answered {
            return Err(RoundError::NoAnswer);
        }

        self.current += 1;
        self.answered = false;

        if self.current < self.countries.len() {
            let question = self
                .generator
                .generate(&self.countries[self.current], &mut self.stats);
            self.current_question = Some(question.clone());
            return Ok(RoundAdvance::Next(question));
        }

        self.current_question = None;
        self.completed_at = Some(now);

        let length = u32::try_from(self.countries.len()).unwrap_or(u32::MAX);
        let report = FinalReport::from_stats(self.score, length, &self.stats)?;
        self.final_report = Some(report.clone());
        Ok(RoundAdvance::Finished(report))
    }
}

impl fmt::Debug for RoundService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundService")
            .field("countries_len", &self.countries.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use quiz_core::model::Continent;
    use quiz_core::model::MessageTier;
    use quiz_core::time::fixed_now;

    use super::*;

    fn build_country(code: &str, continent: Continent) -> Country {
        Country::new(
            code,
            format!("Country {code}"),
            continent,
            format!("Capital {code}"),
            vec![
                format!("Notable {code}"),
                format!("Capital {code}"),
                format!("Town {code}"),
            ],
        )
        .unwrap()
    }

    fn build_pool(n: usize) -> Vec<Country> {
        let continents = [
            Continent::Africa,
            Continent::Asia,
            Continent::Europe,
            Continent::Oceania,
        ];
        (0..n)
            .map(|i| build_country(&format!("c{i}"), continents[i % continents.len()]))
            .collect()
    }

    fn answer_correctly(round: &mut RoundService) -> AnswerOutcome {
        let capital = round
            .current_question()
            .expect("question pending")
            .correct_answer
            .clone();
        round.submit_answer(&capital).expect("first answer scores")
    }

    #[test]
    fn start_generates_first_question_and_counts_attempt() {
        let pool = build_pool(8);
        let round = RoundService::start(&pool, 5, fixed_now()).unwrap();

        assert!(round.current_question().is_some());
        assert_eq!(round.stats().total_attempts(), 1);
        assert_eq!(round.answered_count(), 0);
        assert_eq!(round.remaining(), 5);
        assert!(!round.is_complete());
    }

    #[test]
    fn start_rejects_bad_configuration() {
        let pool = build_pool(3);
        assert_eq!(
            RoundService::start(&pool, 0, fixed_now()).unwrap_err(),
            RoundError::InvalidLength
        );
        assert_eq!(
            RoundService::start(&pool, 4, fixed_now()).unwrap_err(),
            RoundError::NotEnoughCountries {
                requested: 4,
                available: 3
            }
        );
    }

    #[test]
    fn correct_answer_scores_and_reports_outcome() {
        let pool = build_pool(6);
        let mut round = RoundService::start(&pool, 3, fixed_now()).unwrap();

        let outcome = answer_correctly(&mut round);
        assert!(outcome.correct);
        assert_eq!(round.score(), 1);
        assert_eq!(round.answered_count(), 1);
    }

    #[test]
    fn wrong_answer_returns_the_correct_one() {
        let pool = build_pool(6);
        let mut round = RoundService::start(&pool, 3, fixed_now()).unwrap();

        let capital = round.current_question().unwrap().correct_answer.clone();
        let outcome = round.submit_answer("definitely not a capital").unwrap();

        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer, capital);
        assert_eq!(round.score(), 0);
        assert_eq!(round.stats().total_correct(), 0);
    }

    #[test]
    fn duplicate_submissions_are_ignored() {
        let pool = build_pool(6);
        let mut round = RoundService::start(&pool, 3, fixed_now()).unwrap();

        answer_correctly(&mut round);
        let again = round.submit_answer("anything");

        assert!(again.is_none());
        assert_eq!(round.score(), 1);
        assert_eq!(round.stats().total_correct(), 1);
    }

    #[test]
    fn advance_before_answer_is_an_error() {
        let pool = build_pool(6);
        let mut round = RoundService::start(&pool, 3, fixed_now()).unwrap();

        let err = round.advance(fixed_now()).unwrap_err();
        assert_eq!(err, RoundError::NoAnswer);
        assert!(round.current_question().is_some());
    }

    #[test]
    fn full_round_reconciles_stats_and_score() {
        let pool = build_pool(10);
        let length = 7;
        let mut round = RoundService::start(&pool, length, fixed_now()).unwrap();

        let mut correct_submitted = 0_u32;
        loop {
            // Alternate right and wrong answers.
            if correct_submitted % 2 == 0 {
                answer_correctly(&mut round);
            } else {
                round.submit_answer("wrong").unwrap();
            }
            correct_submitted += 1;

            match round.advance(fixed_now()).unwrap() {
                RoundAdvance::Next(question) => {
                    assert!(question.option_count() >= 1);
                    assert!(question.option_count() <= 6);
                }
                RoundAdvance::Finished(report) => {
                    let total: u32 = round.stats().iter().map(|(_, s)| s.total()).sum();
                    assert_eq!(total, length as u32);
                    assert_eq!(round.stats().total_correct(), round.score());
                    for (_, stat) in round.stats().iter() {
                        assert!(stat.correct() <= stat.total());
                    }
                    let expected =
                        (f64::from(round.score()) / length as f64 * 100.0).round() as u32;
                    assert_eq!(report.percentage(), expected);
                    break;
                }
            }
        }

        assert!(round.is_complete());
        assert_eq!(round.completed_at(), Some(fixed_now()));
        assert_eq!(round.answered_count(), length);
        assert_eq!(round.remaining(), 0);
        assert!(round.current_question().is_none());
    }

    #[test]
    fn perfect_round_hits_the_top_tier() {
        let pool = build_pool(6);
        let mut round = RoundService::start(&pool, 4, fixed_now()).unwrap();

        let report = loop {
            answer_correctly(&mut round);
            if let RoundAdvance::Finished(report) = round.advance(fixed_now()).unwrap() {
                break report;
            }
        };

        assert_eq!(report.percentage(), 100);
        assert_eq!(report.message_tier(), MessageTier::Perfect);
        assert_eq!(round.score(), 4);
    }

    #[test]
    fn advance_after_end_returns_cached_report() {
        let pool = build_pool(5);
        let mut round = RoundService::start(&pool, 2, fixed_now()).unwrap();

        answer_correctly(&mut round);
        round.advance(fixed_now()).unwrap();
        round.submit_answer("wrong").unwrap();
        let first = match round.advance(fixed_now()).unwrap() {
            RoundAdvance::Finished(report) => report,
            RoundAdvance::Next(_) => panic!("round should have ended"),
        };

        for _ in 0..3 {
            match round.advance(fixed_now()).unwrap() {
                RoundAdvance::Finished(report) => assert_eq!(report, first),
                RoundAdvance::Next(_) => panic!("round already ended"),
            }
        }
        assert!(round.submit_answer("late click").is_none());
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn progress_tracks_the_round() {
        let pool = build_pool(6);
        let mut round = RoundService::start(&pool, 2, fixed_now()).unwrap();

        let progress = round.progress();
        assert_eq!(progress.total, 2);
        assert_eq!(progress.answered, 0);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.is_complete);

        answer_correctly(&mut round);
        assert_eq!(round.progress().answered, 1);

        round.advance(fixed_now()).unwrap();
        round.submit_answer("wrong").unwrap();
        round.advance(fixed_now()).unwrap();

        let done = round.progress();
        assert_eq!(done.answered, 2);
        assert_eq!(done.remaining, 0);
        assert_eq!(done.score, 1);
        assert!(done.is_complete);
    }
}
