//! Immutable row-key ranges.
//!
//! A [`RowKeyRange`] is a predicate over row keys built from one of the
//! classic interval shapes (closed, open, half-open), a prefix, or the two
//! degenerate ranges matching everything or nothing. Bounds are never
//! validated on construction: a range whose lower key sits above its upper key
//! is legal and simply matches nothing.

use std::{fmt, ops::Bound};

use super::bound::{contains, is_empty_range, max_lower, min_upper};
use crate::{
    error::{Error, Result},
    key::RowKey,
};

/// A contiguous selection of row keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKeyRange {
    /// Matches no key.
    Empty,
    /// Keys between `start` and `end`; unbounded on both sides matches every key.
    Bounded {
        /// Lower bound.
        start: Bound<RowKey>,
        /// Upper bound.
        end: Bound<RowKey>,
    },
}

impl RowKeyRange {
    /// Range matching every key.
    pub fn infinite() -> Self {
        Self::Bounded {
            start: Bound::Unbounded,
            end: Bound::Unbounded,
        }
    }

    /// Range matching no key.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// `start <= key <= end`.
    pub fn closed(start: impl Into<RowKey>, end: impl Into<RowKey>) -> Self {
        Self::Bounded {
            start: Bound::Included(start.into()),
            end: Bound::Included(end.into()),
        }
    }

    /// `start < key < end`.
    pub fn open(start: impl Into<RowKey>, end: impl Into<RowKey>) -> Self {
        Self::Bounded {
            start: Bound::Excluded(start.into()),
            end: Bound::Excluded(end.into()),
        }
    }

    /// `start < key <= end`.
    pub fn left_open(start: impl Into<RowKey>, end: impl Into<RowKey>) -> Self {
        Self::Bounded {
            start: Bound::Excluded(start.into()),
            end: Bound::Included(end.into()),
        }
    }

    /// `start <= key < end`.
    pub fn right_open(start: impl Into<RowKey>, end: impl Into<RowKey>) -> Self {
        Self::Bounded {
            start: Bound::Included(start.into()),
            end: Bound::Excluded(end.into()),
        }
    }

    /// Every key starting with `prefix`.
    ///
    /// Stored as `[prefix, successor(prefix))`; the upper side is unbounded
    /// when the prefix has no successor (empty or all `0xFF`).
    pub fn prefix(prefix: impl Into<RowKey>) -> Self {
        let prefix = prefix.into();
        let end = match prefix.prefix_successor() {
            Some(successor) => Bound::Excluded(successor),
            None => Bound::Unbounded,
        };
        Self::Bounded {
            start: Bound::Included(prefix),
            end,
        }
    }

    /// Builds a range from boundary keys and open flags, the way row ranges are
    /// described by attribute lists. Two empty keys select every row regardless
    /// of the flags.
    pub fn from_flags(
        left: impl Into<RowKey>,
        left_open: bool,
        right: impl Into<RowKey>,
        right_open: bool,
    ) -> Self {
        let (left, right) = (left.into(), right.into());
        if left.is_empty() && right.is_empty() {
            return Self::infinite();
        }
        match (left_open, right_open) {
            (true, true) => Self::open(left, right),
            (false, false) => Self::closed(left, right),
            (false, true) => Self::right_open(left, right),
            (true, false) => Self::left_open(left, right),
        }
    }

    /// Borrowed bounds, or `None` for [`RowKeyRange::Empty`]. Suitable for
    /// driving a `BTreeMap::range` style scan.
    pub fn bounds(&self) -> Option<(Bound<&RowKey>, Bound<&RowKey>)> {
        match self {
            Self::Empty => None,
            Self::Bounded { start, end } => Some((start.as_ref(), end.as_ref())),
        }
    }

    /// Whether `key` falls inside this range, comparing bytes lexicographically.
    pub fn contains(&self, key: &[u8]) -> bool {
        match self {
            Self::Empty => false,
            Self::Bounded { start, end } => contains(
                start.as_ref().map(RowKey::as_bytes),
                end.as_ref().map(RowKey::as_bytes),
                key,
            ),
        }
    }

    /// Whether the range matches no key.
    ///
    /// Besides crossed bounds, an open range whose upper key is the lower key
    /// followed by a single `0x00` byte is empty: no byte string sorts
    /// strictly between the two.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Bounded {
                start: Bound::Excluded(lo),
                end: Bound::Excluded(hi),
            } if is_immediate_successor(lo, hi) => true,
            Self::Bounded { start, end } => is_empty_range(start, end),
        }
    }

    /// Whether the range matches every key.
    pub fn is_infinite(&self) -> bool {
        matches!(
            self,
            Self::Bounded {
                start: Bound::Unbounded,
                end: Bound::Unbounded
            }
        )
    }

    /// Keys matched by both `self` and `other`.
    ///
    /// Keeps the tighter of the two lower bounds and the tighter of the two
    /// upper bounds; at a shared boundary key an open side wins. Collapses to
    /// [`RowKeyRange::Empty`] when nothing survives.
    pub fn intersect(&self, other: &RowKeyRange) -> RowKeyRange {
        let (
            Self::Bounded {
                start: lhs_start,
                end: lhs_end,
            },
            Self::Bounded {
                start: rhs_start,
                end: rhs_end,
            },
        ) = (self, other)
        else {
            return Self::Empty;
        };
        let clipped = Self::Bounded {
            start: max_lower(lhs_start.clone(), rhs_start.clone()),
            end: min_upper(lhs_end.clone(), rhs_end.clone()),
        };
        if clipped.is_empty() {
            return Self::Empty;
        }
        clipped
    }

    /// Rejects explicit bounds that cannot hold any key.
    ///
    /// Construction never calls this; degenerate ranges stay legal and empty.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Bounded {
                start: Bound::Included(lo) | Bound::Excluded(lo),
                end: Bound::Included(hi) | Bound::Excluded(hi),
            } if self.is_empty() => Err(Error::InvalidRange {
                start: lo.clone(),
                end: hi.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Stable interval notation such as `[b"a", b"b")`.
    pub fn to_canonical_text(&self) -> String {
        self.to_string()
    }
}

impl Default for RowKeyRange {
    fn default() -> Self {
        Self::infinite()
    }
}

impl fmt::Display for RowKeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Bounded { start, end } = self else {
            return f.write_str("()");
        };
        match start {
            Bound::Unbounded => f.write_str("(-inf")?,
            Bound::Included(key) => write!(f, "[{key}")?,
            Bound::Excluded(key) => write!(f, "({key}")?,
        }
        f.write_str(", ")?;
        match end {
            Bound::Unbounded => f.write_str("+inf)"),
            Bound::Included(key) => write!(f, "{key}]"),
            Bound::Excluded(key) => write!(f, "{key})"),
        }
    }
}

/// `hi == lo ++ [0x00]`, the smallest key above `lo`.
fn is_immediate_successor(lo: &RowKey, hi: &RowKey) -> bool {
    hi.len() == lo.len() + 1 && hi.starts_with(lo) && hi.last() == Some(&0)
}
