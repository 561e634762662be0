#![deny(missing_docs)]
//! Row selection and cell decoding for sorted, range-scannable tables.
//!
//! Two small engines live here. The [`scan`] module builds row selections:
//! byte-string key ranges, prefixes, and append-only sets of keys and ranges
//! that can be intersected with a range. The [`codec`] module maps typed
//! scalars to fixed-width cell bytes and back, using either the big-endian XDR
//! layout or a little-endian alternative.
//!
//! Everything is synchronous and free of I/O; the same inputs always produce
//! the same outputs, which lets hosts build selections inside
//! create-if-absent closures (see [`registry`]).

mod logging;
mod serdes;

/// Error type shared by the crate.
pub mod error;

/// Owned row keys.
pub mod key;

/// Row selection: key ranges, key sets and version filters.
pub mod scan;

/// Scalar cell codec.
pub mod codec;

/// Codec configuration.
pub mod option;

/// Create-if-absent storage contract for named selections.
pub mod registry;

pub use crate::{
    codec::{CodecStrategy, DataType, Scalar, ValueCodec},
    error::{Error, Result},
    key::RowKey,
    option::CodecOption,
    scan::{RowKeyRange, RowKeySet, RowSetEntry, VersionFilter},
};
