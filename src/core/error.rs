//! Centralised error types used across the crate.

use thiserror::Error;

use crate::core::frame::ParseCsvError;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type bubbled up by public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Caller handed over something no default can be derived from.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A dataset lacks an attribute the operation needs from every dataset.
    #[error("dataset {index} does not have a `{attribute}` attribute")]
    MissingAttribute {
        attribute: &'static str,
        index: usize,
    },

    /// No finite values were available to derive a range from.
    #[error("data set is empty")]
    EmptyData,

    #[error(transparent)]
    Csv(#[from] ParseCsvError),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
