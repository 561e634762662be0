//! Owned row keys.
//!
//! A `RowKey` is an opaque byte string ordered byte-lexicographically, the
//! same order the backing table uses for its rows. The bytes live in a
//! reference-counted [`Bytes`] buffer so clones taken while building or
//! intersecting selections stay cheap. The empty key is a legal key.

use std::{borrow::Borrow, fmt, ops::Deref};

use bytes::Bytes;

/// Owned, cheaply cloneable row key.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey(Bytes);

impl RowKey {
    /// The empty row key.
    pub const fn empty() -> Self {
        Self(Bytes::new())
    }

    /// Wrap a static byte string without copying.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self(Bytes::from_static(bytes))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this key begins with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }

    /// Consume the key, returning its buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Smallest key strictly greater than every key starting with `self`.
    ///
    /// Trailing `0xFF` bytes are dropped and the last remaining byte is
    /// incremented. Returns `None` when no such key exists (empty key or all
    /// bytes `0xFF`), i.e. the prefix range has no upper bound.
    pub fn prefix_successor(&self) -> Option<RowKey> {
        let end = self.0.iter().rposition(|byte| *byte != u8::MAX)?;
        let mut next = self.0[..=end].to_vec();
        next[end] += 1;
        Some(RowKey::from(next))
    }
}

impl Deref for RowKey {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for RowKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Borrow<[u8]> for RowKey {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for RowKey {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for RowKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&[u8]> for RowKey {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl<const N: usize> From<&[u8; N]> for RowKey {
    fn from(bytes: &[u8; N]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl From<String> for RowKey {
    fn from(key: String) -> Self {
        Self(Bytes::from(key))
    }
}

impl From<&str> for RowKey {
    fn from(key: &str) -> Self {
        Self(Bytes::copy_from_slice(key.as_bytes()))
    }
}

impl fmt::Display for RowKey {
    /// Renders as `b"..."`, escaping non-printable bytes as `\xNN`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("b\"")?;
        for byte in self.0.iter() {
            for escaped in std::ascii::escape_default(*byte) {
                fmt::Write::write_char(f, escaped as char)?;
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Debug for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::RowKey;

    #[test]
    fn orders_bytewise() {
        assert!(RowKey::from("a") < RowKey::from("ab"));
        assert!(RowKey::from("ab") < RowKey::from("b"));
        assert!(RowKey::empty() < RowKey::from(&[0u8]));
        assert!(RowKey::from(&[0x7fu8]) < RowKey::from(&[0x80u8]));
    }

    #[test]
    fn prefix_successor_increments_last_byte() {
        assert_eq!(
            RowKey::from("ab").prefix_successor(),
            Some(RowKey::from("ac"))
        );
        assert_eq!(
            RowKey::from(&[b'a', 0xff, 0xff]).prefix_successor(),
            Some(RowKey::from("b"))
        );
        assert_eq!(RowKey::from(&[0xffu8, 0xff]).prefix_successor(), None);
        assert_eq!(RowKey::empty().prefix_successor(), None);
    }

    #[test]
    fn display_escapes_bytes() {
        assert_eq!(RowKey::from("r1").to_string(), "b\"r1\"");
        assert_eq!(
            RowKey::from(&[b'a', 0xff, b'"']).to_string(),
            "b\"a\\xff\\\"\""
        );
        assert_eq!(RowKey::empty().to_string(), "b\"\"");
    }
}
