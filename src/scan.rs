//! Row selection: key ranges, key sets and cell version filters.
//!
//! A caller builds [`RowKeyRange`] values, combines them into a [`RowKeySet`]
//! through append and intersect, and hands the set together with a
//! [`VersionFilter`] to whatever performs the table scan.

mod bound;
mod filter;
mod range;
mod row_set;

pub use filter::{TimestampMicros, VersionFilter};
pub use range::RowKeyRange;
pub use row_set::{RowKeySet, RowSetEntry};
