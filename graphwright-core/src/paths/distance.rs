//! Path lengths with an explicit unreachable marker.

use std::fmt;

/// Length of a path, or the absence of one.
///
/// Ordering places every finite distance below [`Distance::Unreachable`], so
/// `min` behaves like it would with a `+infinity` sentinel.
///
/// # Examples
/// ```
/// use graphwright_core::Distance;
///
/// let direct = Distance::Finite(10);
/// let detour = Distance::Finite(4).saturating_add(Distance::Finite(1));
/// assert_eq!(direct.min(detour), Distance::Finite(5));
/// assert!(Distance::Finite(u64::MAX) < Distance::Unreachable);
/// assert_eq!(Distance::Unreachable.saturating_add(Distance::Finite(1)), Distance::Unreachable);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Distance {
    /// A path of this total weight exists.
    Finite(u64),
    /// No path exists.
    Unreachable,
}

impl Distance {
    /// Distance from a node to itself.
    pub const ZERO: Self = Self::Finite(0);

    /// Returns `true` when a path exists.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the path length, or `None` when unreachable.
    #[must_use]
    pub const fn value(self) -> Option<u64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Unreachable => None,
        }
    }

    /// Concatenates two path lengths. Unreachable absorbs; finite sums
    /// saturate at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Finite(left), Self::Finite(right)) => Self::Finite(left.saturating_add(right)),
            _ => Self::Unreachable,
        }
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Unreachable, Self::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Unreachable => f.write_str("inf"),
        }
    }
}
