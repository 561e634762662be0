//! Unions of discrete row keys and row-key ranges.

use std::fmt;

use super::range::RowKeyRange;
use crate::key::RowKey;

/// One member of a [`RowKeySet`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowSetEntry {
    /// A single row key.
    Key(RowKey),
    /// A contiguous range of row keys.
    Range(RowKeyRange),
}

impl RowSetEntry {
    /// Whether this entry selects `key`.
    pub fn contains(&self, key: &[u8]) -> bool {
        match self {
            RowSetEntry::Key(k) => k.as_bytes() == key,
            RowSetEntry::Range(range) => range.contains(key),
        }
    }
}

impl fmt::Display for RowSetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowSetEntry::Key(key) => write!(f, "{{{key}}}"),
            RowSetEntry::Range(range) => fmt::Display::fmt(range, f),
        }
    }
}

/// Append-only union of row selections.
///
/// Membership is the union of every entry, so append order never changes
/// which keys match; it only fixes the order of the textual dump. Overlapping
/// entries are kept as appended. A new set is empty and matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowKeySet {
    entries: Vec<RowSetEntry>,
}

impl RowKeySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single row key.
    pub fn append_key(&mut self, key: impl Into<RowKey>) {
        self.entries.push(RowSetEntry::Key(key.into()));
    }

    /// Add a row-key range.
    pub fn append_range(&mut self, range: RowKeyRange) {
        self.entries.push(RowSetEntry::Range(range));
    }

    /// Whether any entry selects `key`.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.entries.iter().any(|entry| entry.contains(key))
    }

    /// Number of entries, counting overlapping ones separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in append order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &RowSetEntry> {
        self.entries.iter()
    }

    /// New set holding exactly the keys of `self` that `range` also contains.
    ///
    /// Works entry by entry: a discrete key survives when `range` contains it,
    /// a stored range is replaced by its intersection with `range`, and entries
    /// left empty are dropped. `self` is untouched, so calling this twice on
    /// the same inputs yields equal sets.
    pub fn intersect(&self, range: &RowKeyRange) -> RowKeySet {
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                RowSetEntry::Key(key) => range
                    .contains(key.as_bytes())
                    .then(|| RowSetEntry::Key(key.clone())),
                RowSetEntry::Range(stored) => {
                    let clipped = stored.intersect(range);
                    (!clipped.is_empty()).then_some(RowSetEntry::Range(clipped))
                }
            })
            .collect();
        RowKeySet { entries }
    }

    /// Entry texts in append order joined by ` | `; `{}` for an empty set.
    pub fn to_canonical_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RowKeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("{}");
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            fmt::Display::fmt(entry, f)?;
        }
        Ok(())
    }
}

impl FromIterator<RowKey> for RowKeySet {
    fn from_iter<I: IntoIterator<Item = RowKey>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(RowSetEntry::Key).collect(),
        }
    }
}

impl Extend<RowKeyRange> for RowKeySet {
    fn extend<I: IntoIterator<Item = RowKeyRange>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(RowSetEntry::Range));
    }
}

impl<'a> IntoIterator for &'a RowKeySet {
    type Item = &'a RowSetEntry;
    type IntoIter = std::slice::Iter<'a, RowSetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
