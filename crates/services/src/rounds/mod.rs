mod plan;
mod progress;
mod question;
mod service;
mod workflow;

// Public API of the round subsystem.
pub use crate::error::RoundError;
pub use plan::{RoundPlan, RoundSampler};
pub use progress::RoundProgress;
pub use question::QuestionGenerator;
pub use service::{AnswerOutcome, RoundAdvance, RoundService};
pub use workflow::{AnswerResult, RoundLoopService, DEFAULT_ROUND_LENGTH};
