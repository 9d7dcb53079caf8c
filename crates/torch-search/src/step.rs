//! Successor generation: every state one crossing away.

use torch_core::{PersonId, Roster, Side};

use crate::state::{State, Step};

/// Lazy iterator over the states reachable from one state by a single
/// crossing.
///
/// With the lamp on the left it yields one state per unordered pair of
/// waiting people (`a < b` in canonical order, so each pair once).  With the
/// lamp on the right it yields one state per waiting person walking back.
/// Fewer than two people waiting on the left yields nothing.
///
/// Created by [`successors`].  The source state is borrowed, never mutated.
pub struct Successors<'a> {
    state:   &'a State,
    roster:  &'a Roster,
    waiting: Vec<PersonId>,
    /// Outer cursor (first member of a pair, or the single returner).
    i:       usize,
    /// Inner cursor (second member of a pair); unused for returns.
    j:       usize,
}

/// All states one crossing away from `state`.
pub fn successors<'a>(state: &'a State, roster: &'a Roster) -> Successors<'a> {
    Successors {
        state,
        roster,
        waiting: state.key().waiting().collect(),
        i: 0,
        j: 1,
    }
}

impl Successors<'_> {
    fn next_step(&mut self) -> Option<Step> {
        let n = self.waiting.len();
        match self.state.lamp() {
            Side::Left => loop {
                if self.i >= n {
                    return None;
                }
                if self.j >= n {
                    self.i += 1;
                    self.j = self.i + 1;
                    continue;
                }
                let step = Step::Cross(self.waiting[self.i], self.waiting[self.j]);
                self.j += 1;
                return Some(step);
            },
            Side::Right => {
                let id = *self.waiting.get(self.i)?;
                self.i += 1;
                Some(Step::Return(id))
            }
        }
    }
}

impl Iterator for Successors<'_> {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let step = self.next_step()?;
        Some(self.state.apply(step, self.roster))
    }
}
