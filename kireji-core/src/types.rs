//! Core value types

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use serde::Serialize;

/// Minimum and maximum syllable count achievable across pronunciation variants
///
/// Always satisfies `low <= high`. Ranges of independent words add
/// component-wise; no correlation between words is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SyllableRange {
    low: u32,
    high: u32,
}

impl SyllableRange {
    /// The empty range contributed by nothing at all
    pub const ZERO: SyllableRange = SyllableRange { low: 0, high: 0 };

    /// Create a range, returning `None` when `low > high`
    pub fn new(low: u32, high: u32) -> Option<Self> {
        (low <= high).then_some(Self { low, high })
    }

    /// A range with a single achievable value
    pub fn exact(count: u32) -> Self {
        Self {
            low: count,
            high: count,
        }
    }

    /// Span of a set of counts, or `None` for an empty set
    pub fn from_counts<I>(counts: I) -> Option<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        counts.into_iter().fold(None, |acc, count| {
            Some(match acc {
                None => Self::exact(count),
                Some(Self { low, high }) => Self {
                    low: low.min(count),
                    high: high.max(count),
                },
            })
        })
    }

    /// Smallest achievable count
    pub fn low(&self) -> u32 {
        self.low
    }

    /// Largest achievable count
    pub fn high(&self) -> u32 {
        self.high
    }

    /// Whether only one count is achievable
    pub fn is_exact(&self) -> bool {
        self.low == self.high
    }

    /// Whether `count` lies within the range (inclusive)
    pub fn contains(&self, count: u32) -> bool {
        self.low <= count && count <= self.high
    }
}

impl Add for SyllableRange {
    type Output = SyllableRange;

    fn add(self, rhs: SyllableRange) -> SyllableRange {
        SyllableRange {
            low: self.low.saturating_add(rhs.low),
            high: self.high.saturating_add(rhs.high),
        }
    }
}

impl Sum for SyllableRange {
    fn sum<I: Iterator<Item = SyllableRange>>(iter: I) -> Self {
        iter.fold(SyllableRange::ZERO, Add::add)
    }
}

impl fmt::Display for SyllableRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}
