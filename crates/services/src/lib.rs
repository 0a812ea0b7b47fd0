#![forbid(unsafe_code)]

pub mod error;
pub mod rounds;

pub use quiz_core::Clock;

pub use error::RoundError;
pub use rounds::{
    AnswerOutcome, AnswerResult, QuestionGenerator, RoundAdvance, RoundLoopService, RoundPlan,
    RoundProgress, RoundSampler, RoundService, DEFAULT_ROUND_LENGTH,
};
