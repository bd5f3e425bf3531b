//! bitstream/reader.rs
//! MSB-first bit reader bounded by a meaningful-bit count.

use std::io::{self, Read};

use crate::headers::FormatError;
use crate::types::{HuffmanError, Result};

/// Yields exactly `limit` bits from `inner`, MSB-first.
///
/// Bits in the last byte past `limit` are padding and are never returned.
/// Running out of bytes before `limit` bits is a truncated artifact.
pub struct BitReader<R: Read> {
    inner: R,
    limit: u64,
    consumed: u64,
    cur: u8,
    cur_bits: u8,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R, limit: u64) -> Self {
        Self { inner, limit, consumed: 0, cur: 0, cur_bits: 0 }
    }

    /// Next meaningful bit, or `None` once `limit` bits have been read.
    #[inline]
    pub fn next_bit(&mut self) -> Result<Option<bool>> {
        if self.consumed == self.limit {
            return Ok(None);
        }
        if self.cur_bits == 0 {
            self.cur = self.read_byte()?;
            self.cur_bits = 8;
        }
        self.cur_bits -= 1;
        self.consumed += 1;
        Ok(Some((self.cur >> self.cur_bits) & 1 == 1))
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Fail with `TrailingData` if anything follows the payload.
    pub fn finish(mut self) -> Result<R> {
        let mut probe = [0u8; 1];
        loop {
            match self.inner.read(&mut probe) {
                Ok(0) => return Ok(self.inner),
                Ok(_) => return Err(FormatError::TrailingData.into()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(HuffmanError::Io(e)),
            }
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.inner
            .read_exact(&mut byte)
            .map_err(|e| HuffmanError::from_parse_io(e, "payload"))?;
        Ok(byte[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    fn drain<R: Read>(r: &mut BitReader<R>) -> Vec<bool> {
        let mut out = Vec::new();
        while let Some(b) = r.next_bit().unwrap() {
            out.push(b);
        }
        out
    }

    #[test]
    fn stops_at_limit_and_ignores_padding() {
        let data = [0b1011_0001u8, 0b1111_1111];
        let mut r = BitReader::new(&data[..], 10);
        let bits = drain(&mut r);
        assert_eq!(bits.len(), 10);
        assert_eq!(&bits[..4], &[true, false, true, true]);
        assert_eq!(&bits[8..], &[true, true]);
        r.finish().unwrap();
    }

    #[test]
    fn short_input_is_truncated() {
        let data = [0xAAu8];
        let mut r = BitReader::new(&data[..], 12);
        for _ in 0..8 {
            r.next_bit().unwrap();
        }
        let err = r.next_bit().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CorruptStream);
    }

    #[test]
    fn extra_bytes_are_trailing_data() {
        let data = [0xAAu8, 0x00];
        let mut r = BitReader::new(&data[..], 8);
        drain(&mut r);
        assert!(matches!(
            r.finish(),
            Err(HuffmanError::CorruptStream(FormatError::TrailingData))
        ));
    }
}
