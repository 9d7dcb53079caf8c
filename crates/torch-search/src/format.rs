//! Human-readable rendering of a [`Solution`].
//!
//! ```text
//! n=4 o=6
//! Crossing a and b time 2
//! Returning a 1
//! Crossing c and d time 10
//! Returning b 2
//! Crossing a and b time 2
//! Total time 17
//! ```
//!
//! The `n=… o=…` line (roster size, final frontier size) is only present
//! when the layered search ran.

use std::fmt;

use torch_core::Roster;

use crate::{Solution, Step};

impl Step {
    /// One output line for this step.
    pub fn describe(self, roster: &Roster) -> String {
        let cost = self.cost(roster);
        match self {
            Step::Cross(a, b) => format!("Crossing {} and {} time {cost}", roster.name(a), roster.name(b)),
            Step::CrossAlone(a) => format!("Crossing {} time {cost}", roster.name(a)),
            Step::Return(a) => format!("Returning {} {cost}", roster.name(a)),
        }
    }
}

impl Solution {
    /// Every output line, diagnostic line first when present.
    pub fn lines(&self, roster: &Roster) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.steps().len() + 2);
        if let Some(o) = self.frontier_len {
            lines.push(format!("n={} o={o}", self.people));
        }
        lines.extend(self.steps().iter().map(|step| step.describe(roster)));
        lines.push(format!("Total time {}", self.total()));
        lines
    }

    /// Borrow as something `Display`able, one line per step.
    pub fn display<'a>(&'a self, roster: &'a Roster) -> SolutionDisplay<'a> {
        SolutionDisplay { solution: self, roster }
    }
}

/// Returned by [`Solution::display`].
pub struct SolutionDisplay<'a> {
    solution: &'a Solution,
    roster:   &'a Roster,
}

impl fmt::Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.solution.lines(self.roster) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
