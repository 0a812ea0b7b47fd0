use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{ContinentStats, Country, Question};

/// Maximum number of wrong answers shown beside the capital.
const MAX_DISTRACTORS: usize = 5;

/// Builds a shuffled multiple-choice question for one country.
///
/// Distractors are other cities of the same country. When the most notable
/// city is not the capital it is always among the distractors, so the round
/// never degrades into capital-versus-obscure-towns. A country whose only
/// listed city is its capital yields a single-option question, which is
/// accepted behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionGenerator;

impl QuestionGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a question for the country and record the attempt against
    /// its continent. Attempts are counted when a question is shown, not
    /// when it is answered.
    pub fn generate(&self, country: &Country, stats: &mut ContinentStats) -> Question {
        stats.record_attempt(country.continent());

        let capital = country.capital();
        let notable = country.notable_city();

        let mut distractors: Vec<&str> = Vec::new();
        if notable != capital {
            distractors.push(notable);
        }

        let mut pool: Vec<&str> = Vec::new();
        for city in country.cities() {
            let city = city.as_str();
            if city != capital && !distractors.contains(&city) && !pool.contains(&city) {
                pool.push(city);
            }
        }

        let mut rng = rng();
        pool.as_mut_slice().shuffle(&mut rng);
        let open_slots = MAX_DISTRACTORS - distractors.len();
        distractors.extend(pool.into_iter().take(open_slots));

        let mut options = Vec::with_capacity(distractors.len() + 1);
        options.push(capital.to_string());
        options.extend(distractors.into_iter().map(str::to_string));
        options.as_mut_slice().shuffle(&mut rng);

        Question {
            country: country.clone(),
            correct_answer: capital.to_string(),
            options,
        }
    }
}
