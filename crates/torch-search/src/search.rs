//! The `Solver` and its layered search loop.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use torch_core::{CrossTime, PersonId, Roster, SearchConfig, TieBreak};

use crate::{successors, SearchError, SearchObserver, SearchResult, Solution, State, Step, TracingObserver};

/// Number of crossings that takes `people` (≥ 3) everyone across: `people - 1`
/// pairs out interleaved with `people - 2` single returns.
#[inline]
pub fn crossing_count(people: usize) -> usize {
    2 * people - 3
}

/// Parse a flat `name time ...` argument list and solve it with the
/// default configuration.
pub fn solve_args<S: AsRef<str>>(args: &[S]) -> SearchResult<(Roster, Solution)> {
    let roster = Roster::from_args(args)?;
    let solution = Solver::new(&roster).solve()?;
    Ok((roster, solution))
}

/// `true` if `candidate` should replace `incumbent` as the kept state.
fn prefer(candidate: &State, incumbent: &State, tie_break: TieBreak) -> bool {
    match candidate.elapsed().cmp(&incumbent.elapsed()) {
        std::cmp::Ordering::Less    => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal   => match tie_break {
            TieBreak::LexicographicSteps => candidate.steps() < incumbent.steps(),
            TieBreak::FirstSeen          => false,
        },
    }
}

/// Group `frontier` by dedup key and keep the cheapest state of each group.
///
/// The result holds exactly one state per distinct key, sorted by key so
/// expansion order does not depend on hash iteration.
pub fn collapse(frontier: Vec<State>, tie_break: TieBreak) -> Vec<State> {
    let mut best: FxHashMap<_, State> = FxHashMap::default();
    for state in frontier {
        match best.entry(state.key().clone()) {
            Entry::Vacant(slot) => {
                slot.insert(state);
            }
            Entry::Occupied(mut slot) => {
                if prefer(&state, slot.get(), tie_break) {
                    slot.insert(state);
                }
            }
        }
    }
    let mut kept: Vec<State> = best.into_values().collect();
    kept.sort_unstable_by(|a, b| a.key().cmp(b.key()));
    kept
}

// ── Solver ────────────────────────────────────────────────────────────────────

/// Finds a minimum-time crossing schedule for a roster.
///
/// One or two people are solved directly.  Larger rosters go through the
/// layered search:
///
/// ```text
/// frontier = [initial]
/// repeat 2N-3 times:
///   kept     = cheapest state per (sides, lamp) key in frontier
///   frontier = every successor of every kept state
/// answer = cheapest state in frontier
/// ```
///
/// Only one frontier is alive at a time.  The frontier grows exponentially
/// with N, so rosters much past six people get slow.
pub struct Solver<'a> {
    roster: &'a Roster,
    config: SearchConfig,
}

impl<'a> Solver<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster, config: SearchConfig::default() }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Solve, logging per-layer progress through `tracing`.
    pub fn solve(&self) -> SearchResult<Solution> {
        self.solve_with(&mut TracingObserver)
    }

    /// Solve, reporting layer progress to `observer`.
    pub fn solve_with<O: SearchObserver>(&self, observer: &mut O) -> SearchResult<Solution> {
        if self.roster.is_empty() {
            return Err(SearchError::EmptyRoster);
        }
        self.check_overflow()?;
        match self.roster.len() {
            1 => Ok(self.trivial(Step::CrossAlone(PersonId(0)))),
            2 => Ok(self.trivial(Step::Cross(PersonId(0), PersonId(1)))),
            _ => self.layered(observer),
        }
    }

    /// Every path takes a fixed number of crossings, none slower than the
    /// slowest person, so that product bounds every elapsed total.
    fn check_overflow(&self) -> SearchResult<()> {
        let people = self.roster.len();
        let crossings = if people >= 3 { crossing_count(people) } else { 1 };
        let slowest = self
            .roster
            .ids()
            .map(|id| self.roster.time(id))
            .max()
            .unwrap_or(CrossTime::ZERO);
        match slowest.checked_mul(crossings as u64) {
            Some(_) => Ok(()),
            None    => Err(SearchError::TimeOverflow { slowest, crossings }),
        }
    }

    fn trivial(&self, step: Step) -> Solution {
        Solution {
            state:        State::initial(self.roster.len()).apply(step, self.roster),
            people:       self.roster.len(),
            frontier_len: None,
        }
    }

    fn layered<O: SearchObserver>(&self, observer: &mut O) -> SearchResult<Solution> {
        let people = self.roster.len();
        let crossings = crossing_count(people);
        if people > self.config.warn_above {
            warn!(people, limit = self.config.warn_above, "roster is large; search time grows exponentially");
        }
        info!(people, crossings, "searching");
        observer.on_search_start(people, crossings);

        let mut frontier = vec![State::initial(people)];
        for layer in 0..crossings {
            let kept = collapse(frontier, self.config.tie_break);
            let next: Vec<State> = kept
                .iter()
                .flat_map(|state| successors(state, self.roster))
                .collect();
            observer.on_layer_end(layer, &kept, &next);
            frontier = next;
        }

        let frontier_len = frontier.len();
        let tie_break = self.config.tie_break;
        let best = frontier
            .into_iter()
            .reduce(|best, state| if prefer(&state, &best, tie_break) { state } else { best })
            .ok_or(SearchError::Exhausted { crossings })?;

        debug_assert!(best.is_solved());
        observer.on_search_end(&best, frontier_len);
        info!(total = %best.elapsed(), frontier = frontier_len, "solved");

        Ok(Solution { state: best, people, frontier_len: Some(frontier_len) })
    }
}
