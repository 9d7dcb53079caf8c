//! People and the roster that holds them in canonical order.
//!
//! The roster sorts people by name once, at construction.  `PersonId` is an
//! index into that order, so every per-person array in the solver is laid
//! out the same way and comparing ids compares names.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use crate::{CrossTime, TorchError, TorchResult};

/// Index of a person in a [`Roster`].  Ordering follows name order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u16);

impl PersonId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for PersonId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PersonId, Self::Error> {
        u16::try_from(n).map(PersonId)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

/// One person waiting to cross.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub name: String,
    pub time: CrossTime,
}

/// Largest roster a `PersonId` can index.
pub const MAX_PEOPLE: usize = u16::MAX as usize + 1;

/// The names-to-times mapping, sorted by name.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Build a roster from `(name, time)` entries.
    ///
    /// Names are expected to be unique.  A repeated name is not an error:
    /// the later entry replaces the earlier one and a warning is logged.
    /// More than [`MAX_PEOPLE`] distinct names is rejected.
    pub fn new<I, S>(entries: I) -> TorchResult<Roster>
    where
        I: IntoIterator<Item = (S, CrossTime)>,
        S: Into<String>,
    {
        let mut by_name: BTreeMap<String, CrossTime> = BTreeMap::new();
        for (name, time) in entries {
            let name = name.into();
            if let Some(previous) = by_name.insert(name.clone(), time) {
                warn!(%name, %previous, replacement = %time, "duplicate name; keeping the later time");
            }
        }
        if by_name.len() > MAX_PEOPLE {
            return Err(TorchError::TooManyPeople(by_name.len()));
        }
        let people = by_name
            .into_iter()
            .map(|(name, time)| Person { name, time })
            .collect();
        Ok(Roster { people })
    }

    /// Parse a flat `name time name time ...` argument list.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> TorchResult<Roster> {
        if args.is_empty() {
            return Err(TorchError::EmptyInput);
        }
        if args.len() % 2 != 0 {
            return Err(TorchError::OddArgumentCount(args.len()));
        }

        let entries = args
            .chunks_exact(2)
            .map(|pair| {
                let name = pair[0].as_ref();
                let value = pair[1].as_ref();
                value
                    .parse::<CrossTime>()
                    .map(|time| (name.to_owned(), time))
                    .map_err(|source| TorchError::InvalidTime {
                        name:  name.to_owned(),
                        value: value.to_owned(),
                        source,
                    })
            })
            .collect::<TorchResult<Vec<_>>>()?;

        Roster::new(entries)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// # Panics
    /// Panics if `id` is not from this roster.
    #[inline]
    pub fn person(&self, id: PersonId) -> &Person {
        &self.people[id.index()]
    }

    #[inline]
    pub fn name(&self, id: PersonId) -> &str {
        &self.person(id).name
    }

    #[inline]
    pub fn time(&self, id: PersonId) -> CrossTime {
        self.person(id).time
    }

    /// Look a person up by name.
    pub fn id_of(&self, name: &str) -> Option<PersonId> {
        self.people
            .binary_search_by(|p| p.name.as_str().cmp(name))
            .ok()
            .and_then(|i| PersonId::try_from(i).ok())
    }

    /// All ids in canonical order.
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        // `new` caps the length at `MAX_PEOPLE`, so every index converts.
        (0..self.people.len()).map_while(|i| PersonId::try_from(i).ok())
    }
}
