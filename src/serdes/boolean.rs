use bytes::BufMut;

use super::{ByteOrder, FixedWidth};

// Booleans take a full 32-bit word: 0 or 1 on encode, any non-zero word reads
// back as true.
impl FixedWidth for bool {
    const WIDTH: usize = <u32 as FixedWidth>::WIDTH;

    fn encode<B: BufMut>(&self, order: ByteOrder, buf: &mut B) {
        u32::from(*self).encode(order, buf)
    }

    fn decode(order: ByteOrder, src: &[u8]) -> Option<Self> {
        u32::decode(order, src).map(|word| word != 0)
    }
}
