//! codes/code.rs
//! Fixed-capacity bit string holding one symbol's code.

use std::fmt;

use crate::constants::{CODE_BYTES, MAX_CODE_LEN};

/// A code of 0..=255 bits stored MSB-first.
///
/// Bit `i` lives in byte `i / 8` at position `7 - i % 8`, which is the same
/// layout the payload uses, so `as_bytes()` can go to the wire unchanged.
/// Bits past `len` are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    len: u8,
    bits: [u8; CODE_BYTES],
}

impl Code {
    pub const fn empty() -> Self {
        Self { len: 0, bits: [0u8; CODE_BYTES] }
    }

    /// Rebuild a code from its wire form. `None` if `len` exceeds the
    /// capacity or `packed` is shorter than `ceil(len / 8)`.
    pub fn from_packed(len: u8, packed: &[u8]) -> Option<Self> {
        let n = Self::byte_len_for(len);
        if len as usize > MAX_CODE_LEN || packed.len() < n {
            return None;
        }
        let mut code = Self::empty();
        code.len = len;
        code.bits[..n].copy_from_slice(&packed[..n]);
        code.clear_tail();
        Some(code)
    }

    /// Parse a string of `'0'`/`'1'` characters.
    pub fn parse(s: &str) -> Option<Self> {
        let mut code = Self::empty();
        for c in s.chars() {
            code = match c {
                '0' => code.with_bit(false)?,
                '1' => code.with_bit(true)?,
                _ => return None,
            };
        }
        Some(code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        debug_assert!(i < self.len());
        (self.bits[i / 8] >> (7 - i % 8)) & 1 == 1
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }

    /// Copy of `self` with one more bit appended. `None` at capacity.
    pub fn with_bit(&self, bit: bool) -> Option<Self> {
        let i = self.len();
        if i >= MAX_CODE_LEN {
            return None;
        }
        let mut next = *self;
        if bit {
            next.bits[i / 8] |= 1 << (7 - i % 8);
        }
        next.len += 1;
        Some(next)
    }

    /// Treat the code as a `len`-bit integer and add one.
    /// Returns `None` when the value would need another bit.
    pub fn incremented(&self) -> Option<Self> {
        let mut next = *self;
        for i in (0..self.len()).rev() {
            let mask = 1 << (7 - i % 8);
            if next.bits[i / 8] & mask == 0 {
                next.bits[i / 8] |= mask;
                return Some(next);
            }
            next.bits[i / 8] &= !mask;
        }
        None
    }

    /// Append zero bits until the code is `len` bits long.
    pub fn widened(&self, len: usize) -> Option<Self> {
        if len > MAX_CODE_LEN || len < self.len() {
            return None;
        }
        let mut next = *self;
        next.len = len as u8;
        Some(next)
    }

    /// True if `self` is a prefix of `other` (equal codes count).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && (0..self.len()).all(|i| self.bit(i) == other.bit(i))
    }

    /// Packed wire bytes, `ceil(len / 8)` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits[..Self::byte_len_for(self.len)]
    }

    const fn byte_len_for(len: u8) -> usize {
        (len as usize).div_ceil(8)
    }

    fn clear_tail(&mut self) {
        let len = self.len();
        if len % 8 != 0 {
            self.bits[len / 8] &= 0xFFu8 << (8 - len % 8);
        }
        for b in self.bits.iter_mut().skip(len.div_ceil(8)) {
            *b = 0;
        }
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self)
    }
}
