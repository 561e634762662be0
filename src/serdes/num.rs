use std::mem::size_of;

use bytes::BufMut;

use super::{ByteOrder, FixedWidth};

macro_rules! implement_fixed_width {
    ($ty:ty) => {
        impl FixedWidth for $ty {
            const WIDTH: usize = size_of::<$ty>();

            fn encode<B: BufMut>(&self, order: ByteOrder, buf: &mut B) {
                match order {
                    ByteOrder::Big => buf.put_slice(&self.to_be_bytes()),
                    ByteOrder::Little => buf.put_slice(&self.to_le_bytes()),
                }
            }

            fn decode(order: ByteOrder, src: &[u8]) -> Option<Self> {
                let raw: [u8; size_of::<$ty>()] = src.try_into().ok()?;
                Some(match order {
                    ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    ByteOrder::Little => <$ty>::from_le_bytes(raw),
                })
            }
        }
    };
}

implement_fixed_width!(i32);
implement_fixed_width!(i64);
implement_fixed_width!(u32);
// IEEE-754 bit patterns, NaN payloads included.
implement_fixed_width!(f32);
implement_fixed_width!(f64);
