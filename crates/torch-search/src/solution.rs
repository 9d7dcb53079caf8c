//! The solver's output.

use torch_core::CrossTime;

use crate::{State, Step};

/// A minimum-time schedule.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Winning final state; its path is the schedule.
    pub state: State,
    /// Roster size.
    pub people: usize,
    /// Size of the last frontier before the winner was picked.  `None` when
    /// the roster was trivial and no search ran.
    pub frontier_len: Option<usize>,
}

impl Solution {
    #[inline]
    pub fn steps(&self) -> &[Step] {
        self.state.steps()
    }

    #[inline]
    pub fn total(&self) -> CrossTime {
        self.state.elapsed()
    }
}
