//! Crossing-time model.
//!
//! Times are unitless non-negative integers.  A pair crossing costs the
//! slower member's time; a return costs the returner's time.  All
//! arithmetic is exact, so equal totals compare equal.

use std::fmt;

/// Time taken by one crossing, or the running total along a path.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossTime(pub u64);

impl CrossTime {
    pub const ZERO: CrossTime = CrossTime(0);

    /// Cost of two people walking together: the slower one sets the pace.
    #[inline]
    pub fn pair(a: CrossTime, b: CrossTime) -> CrossTime {
        a.max(b)
    }

    /// `self * n`, or `None` on overflow.
    #[inline]
    pub fn checked_mul(self, n: u64) -> Option<CrossTime> {
        self.0.checked_mul(n).map(CrossTime)
    }
}

impl std::ops::Add for CrossTime {
    type Output = CrossTime;
    #[inline]
    fn add(self, rhs: CrossTime) -> CrossTime {
        CrossTime(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for CrossTime {
    #[inline]
    fn add_assign(&mut self, rhs: CrossTime) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for CrossTime {
    fn sum<I: Iterator<Item = CrossTime>>(iter: I) -> CrossTime {
        iter.fold(CrossTime::ZERO, |acc, t| acc + t)
    }
}

impl std::str::FromStr for CrossTime {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<CrossTime, Self::Err> {
        s.parse::<u64>().map(CrossTime)
    }
}

impl fmt::Display for CrossTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
