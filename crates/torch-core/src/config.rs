//! Search configuration.

/// How to choose between two states that reach the same configuration in
/// the same elapsed time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Keep the state whose step sequence sorts first, comparing people by
    /// their canonical (name) order.  Reproducible across runs.
    #[default]
    LexicographicSteps,
    /// Keep whichever state was generated first.  Generation order is
    /// itself deterministic, but depends on the order representatives are
    /// expanded in.
    FirstSeen,
}

/// Tunables for one solver run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Rule used when collapsing equal-cost states with the same key.
    pub tie_break: TieBreak,
    /// Rosters larger than this log a warning before searching.  The
    /// frontier grows exponentially; around 6 people is the practical limit.
    pub warn_above: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tie_break:  TieBreak::default(),
            warn_above: 6,
        }
    }
}
