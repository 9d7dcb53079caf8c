//! Puzzle snapshots and the crossing events that connect them.

use torch_core::{CrossTime, PersonId, Roster, Side};

// ── Step ──────────────────────────────────────────────────────────────────────

/// One crossing event.
///
/// The derived `Ord` compares people by canonical id, which is name order;
/// the solver's lexicographic tie-break relies on that.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Two people go left → right together.  First id is the smaller.
    Cross(PersonId, PersonId),
    /// One person goes left → right alone.  Only used for a one-person roster.
    CrossAlone(PersonId),
    /// One person brings the lamp back right → left.
    Return(PersonId),
}

impl Step {
    /// Time this crossing takes.
    pub fn cost(self, roster: &Roster) -> CrossTime {
        match self {
            Step::Cross(a, b) => CrossTime::pair(roster.time(a), roster.time(b)),
            Step::CrossAlone(a) | Step::Return(a) => roster.time(a),
        }
    }

    /// Bank the movers end up on.
    pub fn destination(self) -> Side {
        match self {
            Step::Cross(..) | Step::CrossAlone(_) => Side::Right,
            Step::Return(_) => Side::Left,
        }
    }

    fn movers(self) -> (PersonId, Option<PersonId>) {
        match self {
            Step::Cross(a, b) => (a, Some(b)),
            Step::CrossAlone(a) | Step::Return(a) => (a, None),
        }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Where everyone and the lamp are.  This is the dedup key: two states with
/// equal configurations have identical futures.
///
/// `sides` is indexed by [`PersonId`], i.e. in canonical name order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    sides: Vec<Side>,
    lamp:  Side,
}

impl Configuration {
    /// Everyone and the lamp on `side`.
    pub fn all_on(people: usize, side: Side) -> Self {
        Self { sides: vec![side; people], lamp: side }
    }

    #[inline]
    pub fn side(&self, id: PersonId) -> Side {
        self.sides[id.index()]
    }

    #[inline]
    pub fn lamp(&self) -> Side {
        self.lamp
    }

    /// People standing with the lamp, in canonical order.
    pub fn waiting(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.sides
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == self.lamp)
            .filter_map(|(i, _)| PersonId::try_from(i).ok())
    }

    /// `true` once everyone and the lamp are on the right.
    pub fn is_solved(&self) -> bool {
        self.lamp == Side::Right && self.sides.iter().all(|s| *s == Side::Right)
    }
}

// ── State ─────────────────────────────────────────────────────────────────────

/// A point on one candidate path: configuration, cost so far, and the steps
/// taken to get here.
///
/// States are never mutated once built.  [`State::apply`] returns a fresh
/// copy, so sibling branches never share anything mutable.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    config:  Configuration,
    elapsed: CrossTime,
    steps:   Vec<Step>,
}

impl State {
    /// Everyone on the left with the lamp, nothing spent.
    pub fn initial(people: usize) -> Self {
        Self {
            config:  Configuration::all_on(people, Side::Left),
            elapsed: CrossTime::ZERO,
            steps:   Vec::new(),
        }
    }

    /// Replay `steps` from the initial state.
    pub fn replay(roster: &Roster, steps: &[Step]) -> Self {
        steps
            .iter()
            .fold(State::initial(roster.len()), |state, &step| state.apply(step, roster))
    }

    /// The dedup key.
    #[inline]
    pub fn key(&self) -> &Configuration {
        &self.config
    }

    #[inline]
    pub fn elapsed(&self) -> CrossTime {
        self.elapsed
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn lamp(&self) -> Side {
        self.config.lamp
    }

    #[inline]
    pub fn side(&self, id: PersonId) -> Side {
        self.config.side(id)
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.config.is_solved()
    }

    /// Successor state after `step`.  `self` is left untouched.
    ///
    /// The movers must be on the lamp's side; this is checked in debug
    /// builds only.
    pub fn apply(&self, step: Step, roster: &Roster) -> State {
        let mut next = self.clone();
        let to = step.destination();
        let (a, b) = step.movers();
        for id in std::iter::once(a).chain(b) {
            debug_assert_eq!(next.config.sides[id.index()], self.config.lamp, "{id} is not with the lamp");
            next.config.sides[id.index()] = to;
        }
        next.config.lamp = to;
        next.elapsed += step.cost(roster);
        next.steps.push(step);
        next
    }
}
