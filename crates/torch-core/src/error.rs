//! Input error type.
//!
//! Everything here is an invalid-input condition: the roster could not be
//! built from what the caller supplied.  `torch-search` wraps this type as
//! `SearchError::Input`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TorchError {
    #[error("no people given")]
    EmptyInput,

    #[error("expected name/time pairs but got {0} arguments")]
    OddArgumentCount(usize),

    #[error("invalid crossing time {value:?} for {name}")]
    InvalidTime {
        name:  String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// More people than a `PersonId` can index.
    #[error("{0} people exceeds the roster limit")]
    TooManyPeople(usize),
}

/// Shorthand result type for `torch-core`.
pub type TorchResult<T> = Result<T, TorchError>;
