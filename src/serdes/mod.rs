//! Fixed-width primitive layouts.
//!
//! Every primitive handled here occupies the same number of bytes for every
//! value, so cells can be sliced without length prefixes. The byte order is
//! chosen per call; nothing depends on the host's native order.

mod boolean;
mod num;

use bytes::BufMut;

/// Byte order used to lay out a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ByteOrder {
    Big,
    Little,
}

/// A primitive with a fixed encoded width.
pub(crate) trait FixedWidth: Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    fn encode<B: BufMut>(&self, order: ByteOrder, buf: &mut B);

    /// Returns `None` unless `src` is exactly [`Self::WIDTH`] bytes long.
    fn decode(order: ByteOrder, src: &[u8]) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::{ByteOrder, FixedWidth};

    #[test]
    fn test_encode_decode() {
        let mut buf = Vec::new();
        0x0102_0304i32.encode(ByteOrder::Big, &mut buf);
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(i32::decode(ByteOrder::Big, &buf), Some(0x0102_0304));
        assert_eq!(i32::decode(ByteOrder::Little, &buf), Some(0x0403_0201));

        buf.clear();
        0x0102_0304i32.encode(ByteOrder::Little, &mut buf);
        assert_eq!(buf, [4, 3, 2, 1]);
    }

    #[test]
    fn decode_requires_exact_width() {
        assert_eq!(i32::decode(ByteOrder::Big, &[0; 3]), None);
        assert_eq!(i32::decode(ByteOrder::Big, &[0; 5]), None);
        assert_eq!(i64::decode(ByteOrder::Little, &[0; 4]), None);
        assert_eq!(f64::decode(ByteOrder::Big, &[]), None);
    }
}
