use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str,
};

use serde::{Serialize, Serializer};
use thiserror::Error;

// === CapacityError === //

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Error)]
#[error("{needed} byte(s) do not fit in the {remaining} byte(s) of remaining capacity")]
pub struct CapacityError {
    pub needed: usize,
    pub remaining: usize,
}

// === BoundedString === //

/// A UTF-8 string stored inline in a buffer of `N` bytes.
///
/// Only the first [`len`](Self::len) bytes are content. Everything past that
/// is scratch space and never participates in comparisons, hashing or views.
#[derive(Copy, Clone)]
pub struct BoundedString<const N: usize> {
    buffer: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedString<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self {
            buffer: [0u8; N],
            len: 0,
        }
    }

    /// Copies the first `len` bytes of `src`.
    ///
    /// Panics when `len` exceeds the capacity, exceeds `src`, or splits a
    /// UTF-8 sequence.
    pub const fn from_str_len(src: &str, len: usize) -> Self {
        assert!(len <= N, "explicit length exceeds the bounded capacity");
        assert!(len <= src.len(), "explicit length exceeds the source text");
        assert!(
            is_char_boundary(src.as_bytes(), len),
            "explicit length splits a UTF-8 sequence"
        );

        let mut out = Self::new();
        copy_into(&mut out.buffer, 0, src.as_bytes(), len);
        out.len = len;
        out
    }

    /// Copies the longest prefix of `src` that fits, cut on a char boundary.
    pub const fn truncated(src: &str) -> Self {
        let mut out = Self::new();
        out.push_str_truncating(src);
        out
    }

    pub const fn try_push_str(&mut self, str: &str) -> Result<(), CapacityError> {
        let remaining = self.remaining();

        if str.len() > remaining {
            return Err(CapacityError {
                needed: str.len(),
                remaining,
            });
        }

        copy_into(&mut self.buffer, self.len, str.as_bytes(), str.len());
        self.len += str.len();

        Ok(())
    }

    /// Appends as much of `str` as fits and returns the number of bytes written.
    pub const fn push_str_truncating(&mut self, str: &str) -> usize {
        let mut count = str.len();

        if count > self.remaining() {
            count = self.remaining();

            while !is_char_boundary(str.as_bytes(), count) {
                count -= 1;
            }
        }

        copy_into(&mut self.buffer, self.len, str.as_bytes(), count);
        self.len += count;

        count
    }

    /// Joins two strings into a buffer able to hold both capacities.
    ///
    /// `O` must be at least `N + M`, which is checked when the call is
    /// monomorphized.
    pub const fn concat<const M: usize, const O: usize>(
        &self,
        other: &BoundedString<M>,
    ) -> BoundedString<O> {
        const {
            assert!(N + M <= O, "concatenation target is smaller than both operands");
        }

        let mut out = BoundedString::<O>::new();
        copy_into(&mut out.buffer, 0, self.as_bytes(), self.len);
        copy_into(&mut out.buffer, self.len, other.as_bytes(), other.len);
        out.len = self.len + other.len;
        out
    }

    pub const fn size(&self) -> usize {
        self.len
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub const fn remaining(&self) -> usize {
        N - self.len
    }

    /// Marks the first `size` bytes of the buffer as content. Writers must
    /// have filled that prefix with ASCII beforehand.
    pub(crate) const fn set_size(&mut self, size: usize) {
        assert!(size <= N, "size exceeds the bounded capacity");
        self.len = size;
    }

    pub(crate) const fn buffer_mut(&mut self) -> &mut [u8; N] {
        &mut self.buffer
    }

    pub(crate) const fn push_byte(&mut self, byte: u8) {
        assert!(byte.is_ascii());
        assert!(self.len < N, "bounded string is full");

        self.buffer[self.len] = byte;
        self.len += 1;
    }

    pub(crate) const fn push_fitting(&mut self, str: &str) {
        if self.try_push_str(str).is_err() {
            panic!("bounded string is full");
        }
    }

    pub const fn as_bytes(&self) -> &[u8] {
        let buffer: &[u8] = &self.buffer;
        buffer.split_at(self.len).0
    }

    pub const fn as_str(&self) -> &str {
        // SAFETY: every write path copies whole UTF-8 sequences or ASCII bytes.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    pub const fn view(&self) -> &str {
        self.as_str()
    }
}

pub(crate) const fn is_char_boundary(bytes: &[u8], index: usize) -> bool {
    if index == 0 || index == bytes.len() {
        return true;
    }

    // Continuation bytes are `0b10xx_xxxx`.
    index < bytes.len() && (bytes[index] as i8) >= -0x40
}

const fn copy_into(dst: &mut [u8], at: usize, src: &[u8], count: usize) {
    let mut i = 0;

    while i < count {
        dst[at + i] = src[i];
        i += 1;
    }
}

// === Trait impls === //

impl<const N: usize> Default for BoundedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for BoundedString<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for BoundedString<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> Borrow<str> for BoundedString<N> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> fmt::Debug for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Write for BoundedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.try_push_str(s).map_err(|_| fmt::Error)
    }
}

impl<const N: usize, const M: usize> PartialEq<BoundedString<M>> for BoundedString<N> {
    fn eq(&self, other: &BoundedString<M>) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for BoundedString<N> {}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> PartialOrd for BoundedString<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for BoundedString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl<const N: usize> Hash for BoundedString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<const N: usize> TryFrom<&str> for BoundedString<N> {
    type Error = CapacityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut out = Self::new();
        out.try_push_str(value)?;
        Ok(out)
    }
}

impl<const N: usize> Serialize for BoundedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
