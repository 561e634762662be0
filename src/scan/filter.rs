//! Cell version filters applied next to a row selection.
//!
//! These are passed through untouched to the table-scan collaborator; the
//! crate only evaluates the timestamp predicate and renders a stable dump.

use std::fmt;

/// Microseconds since the Unix epoch, as stored on each cell.
pub type TimestampMicros = i64;

/// Which cell versions a scan keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VersionFilter {
    /// The newest `n` versions of each column.
    Latest(u32),
    /// Cells with `start <= ts < end`. An `end` of `0` leaves the range open above.
    TimestampRange {
        /// Inclusive lower timestamp.
        start: TimestampMicros,
        /// Exclusive upper timestamp, `0` for none.
        end: TimestampMicros,
    },
}

impl VersionFilter {
    /// Keep only the newest `n` versions.
    pub fn latest(n: u32) -> Self {
        Self::Latest(n)
    }

    /// Keep cells written in `[start, end)`.
    pub fn timestamp_range_micros(start: TimestampMicros, end: TimestampMicros) -> Self {
        Self::TimestampRange { start, end }
    }

    /// Whether a cell written at `ts` passes the timestamp part of the filter.
    ///
    /// `Latest` passes every timestamp; counting versions is left to the scan.
    pub fn matches_timestamp(&self, ts: TimestampMicros) -> bool {
        match *self {
            Self::Latest(_) => true,
            Self::TimestampRange { start, end } => ts >= start && (end == 0 || ts < end),
        }
    }

    /// Stable text such as `latest(1)` or `timestamp_range_micros[10, 20)`.
    pub fn to_canonical_text(&self) -> String {
        self.to_string()
    }
}

impl Default for VersionFilter {
    fn default() -> Self {
        Self::Latest(1)
    }
}

impl fmt::Display for VersionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest(n) => write!(f, "latest({n})"),
            Self::TimestampRange { start, end: 0 } => {
                write!(f, "timestamp_range_micros[{start}, +inf)")
            }
            Self::TimestampRange { start, end } => {
                write!(f, "timestamp_range_micros[{start}, {end})")
            }
        }
    }
}
