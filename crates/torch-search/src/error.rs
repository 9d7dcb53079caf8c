use thiserror::Error;
use torch_core::{CrossTime, TorchError};

#[derive(Debug, Error)]
pub enum SearchError {
    /// The roster could not be built from the arguments.
    #[error("invalid input: {0}")]
    Input(#[from] TorchError),

    #[error("cannot schedule an empty roster")]
    EmptyRoster,

    /// Some path total could exceed `u64`: `crossings` trips at the
    /// slowest person's pace does not fit.
    #[error("crossing times too large: {crossings} crossings at {slowest} overflows")]
    TimeOverflow { slowest: CrossTime, crossings: usize },

    /// The final frontier was empty.  Unreachable for a roster of three or
    /// more; kept so the final pick has no panic path.
    #[error("no state survived {crossings} crossings")]
    Exhausted { crossings: usize },
}

pub type SearchResult<T> = Result<T, SearchError>;
