//! Typed scalar cell codec.
//!
//! Cells in the table are raw bytes; this module turns them into typed
//! scalars and back. Two layouts are available and both are always compiled:
//!
//! | Type   | Width | [`CodecStrategy::Standard`]        | [`CodecStrategy::Custom`]            |
//! |--------|-------|------------------------------------|--------------------------------------|
//! | bool   | 4     | big-endian `u32`, 0 or 1           | little-endian `u32`, 0 or 1          |
//! | int32  | 4     | big-endian two's complement        | little-endian two's complement       |
//! | int64  | 8     | big-endian two's complement        | little-endian two's complement       |
//! | float  | 4     | IEEE-754 binary32, big-endian      | IEEE-754 binary32, little-endian     |
//! | double | 8     | IEEE-754 binary64, big-endian      | IEEE-754 binary64, little-endian     |
//! | string | any   | raw bytes                          | raw bytes                            |
//!
//! The standard layout matches XDR, which keeps cells readable by tools that
//! were written against HBase-era data.

use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::{
    error::{Error, Result},
    logging::rowscope_log,
    option::CodecOption,
    serdes::{ByteOrder, FixedWidth},
};

/// Scalar types a cell may be read as.
///
/// Only `Bool`, `Int32`, `Int64`, `Float`, `Double` and `String` have a
/// layout; the rest are rejected with [`Error::UnsupportedType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Unsigned 64-bit integer.
    UInt64,
    /// IEEE-754 binary16.
    Half,
    /// IEEE-754 binary32.
    Float,
    /// IEEE-754 binary64.
    Double,
    /// Byte string.
    String,
}

impl DataType {
    /// Whether the codec has a layout for this type.
    pub fn is_supported(&self) -> bool {
        matches!(
            self,
            DataType::Bool
                | DataType::Int32
                | DataType::Int64
                | DataType::Float
                | DataType::Double
                | DataType::String
        )
    }

    /// Encoded width of a supported fixed-width type; `None` for strings and
    /// unsupported types.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            DataType::Bool => Some(<bool as FixedWidth>::WIDTH),
            DataType::Int32 => Some(<i32 as FixedWidth>::WIDTH),
            DataType::Int64 => Some(<i64 as FixedWidth>::WIDTH),
            DataType::Float => Some(<f32 as FixedWidth>::WIDTH),
            DataType::Double => Some(<f64 as FixedWidth>::WIDTH),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Bool => "bool",
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::UInt8 => "uint8",
            DataType::UInt16 => "uint16",
            DataType::UInt32 => "uint32",
            DataType::UInt64 => "uint64",
            DataType::Half => "half",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::String => "string",
        };
        f.write_str(name)
    }
}

/// A decoded cell value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// Boolean.
    Bool(bool),
    /// 32-bit integer.
    Int32(i32),
    /// 64-bit integer.
    Int64(i64),
    /// binary32 float.
    Float(f32),
    /// binary64 float.
    Double(f64),
    /// Raw bytes.
    String(Bytes),
}

impl Scalar {
    /// The type this value encodes as.
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Bool(_) => DataType::Bool,
            Scalar::Int32(_) => DataType::Int32,
            Scalar::Int64(_) => DataType::Int64,
            Scalar::Float(_) => DataType::Float,
            Scalar::Double(_) => DataType::Double,
            Scalar::String(_) => DataType::String,
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int32(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int64(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Float(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Double(value)
    }
}

impl From<Bytes> for Scalar {
    fn from(value: Bytes) -> Self {
        Scalar::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(Bytes::copy_from_slice(value.as_bytes()))
    }
}

/// Which byte layout the codec uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CodecStrategy {
    /// Big-endian XDR layout.
    #[default]
    Standard,
    /// Little-endian layout with the same widths; only round-trips with itself.
    Custom,
}

impl CodecStrategy {
    fn byte_order(self) -> ByteOrder {
        match self {
            CodecStrategy::Standard => ByteOrder::Big,
            CodecStrategy::Custom => ByteOrder::Little,
        }
    }
}

impl fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecStrategy::Standard => f.write_str("standard"),
            CodecStrategy::Custom => f.write_str("custom"),
        }
    }
}

/// Converts between typed scalars and cell bytes.
///
/// The codec is a plain value: it holds no state besides its strategy, and
/// the same input always yields the same output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueCodec {
    strategy: CodecStrategy,
}

impl ValueCodec {
    /// Codec configured by `option`.
    pub fn new(option: &CodecOption) -> Self {
        Self::with_strategy(option.codec_strategy())
    }

    /// Codec using `strategy`.
    pub const fn with_strategy(strategy: CodecStrategy) -> Self {
        Self { strategy }
    }

    /// The layout in use.
    pub fn strategy(&self) -> CodecStrategy {
        self.strategy
    }

    /// Encode `value` as `data_type`.
    ///
    /// Fails with [`Error::UnsupportedType`] when `data_type` has no layout and
    /// with [`Error::TypeMismatch`] when `value` is of another type.
    pub fn encode(&self, value: &Scalar, data_type: DataType) -> Result<Bytes> {
        if !data_type.is_supported() {
            rowscope_log!(
                log::Level::Debug,
                "encode_rejected",
                "data_type={} reason=unsupported",
                data_type
            );
            return Err(Error::UnsupportedType { data_type });
        }
        if value.data_type() != data_type {
            rowscope_log!(
                log::Level::Debug,
                "encode_rejected",
                "data_type={} value_type={} reason=mismatch",
                data_type,
                value.data_type()
            );
            return Err(Error::TypeMismatch {
                expected: data_type,
                actual: value.data_type(),
            });
        }

        let order = self.strategy.byte_order();
        let mut buf = BytesMut::with_capacity(data_type.fixed_width().unwrap_or_default());
        match value {
            Scalar::Bool(v) => v.encode(order, &mut buf),
            Scalar::Int32(v) => v.encode(order, &mut buf),
            Scalar::Int64(v) => v.encode(order, &mut buf),
            Scalar::Float(v) => v.encode(order, &mut buf),
            Scalar::Double(v) => v.encode(order, &mut buf),
            Scalar::String(v) => return Ok(v.clone()),
        }
        Ok(buf.freeze())
    }

    /// Decode cell bytes as `data_type`.
    ///
    /// Fixed-width types require exactly their width; strings take the bytes
    /// as they are.
    pub fn decode(&self, bytes: &[u8], data_type: DataType) -> Result<Scalar> {
        let order = self.strategy.byte_order();
        let decoded = match data_type {
            DataType::Bool => bool::decode(order, bytes).map(Scalar::Bool),
            DataType::Int32 => i32::decode(order, bytes).map(Scalar::Int32),
            DataType::Int64 => i64::decode(order, bytes).map(Scalar::Int64),
            DataType::Float => f32::decode(order, bytes).map(Scalar::Float),
            DataType::Double => f64::decode(order, bytes).map(Scalar::Double),
            DataType::String => Some(Scalar::String(Bytes::copy_from_slice(bytes))),
            _ => {
                rowscope_log!(
                    log::Level::Debug,
                    "decode_rejected",
                    "data_type={} reason=unsupported",
                    data_type
                );
                return Err(Error::UnsupportedType { data_type });
            }
        };
        decoded.ok_or_else(|| {
            let expected = data_type.fixed_width().unwrap_or_default();
            rowscope_log!(
                log::Level::Debug,
                "decode_rejected",
                "data_type={} expected={} actual={} reason=length",
                data_type,
                expected,
                bytes.len()
            );
            Error::MalformedInput {
                data_type,
                expected,
                actual: bytes.len(),
            }
        })
    }
}
