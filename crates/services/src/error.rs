//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{CountryError, ReportError};

/// Errors emitted by round services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("round length must be greater than zero")]
    InvalidLength,

    #[error("round length {requested} exceeds the {available} available countries")]
    NotEnoughCountries { requested: usize, available: usize },

    #[error("no answer has been submitted for the current question")]
    NoAnswer,

    #[error(transparent)]
    Country(#[from] CountryError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
