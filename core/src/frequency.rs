//! frequency.rs
//! Symbol statistics collected in one pass over the input.

use std::io::{self, Read};

use crate::constants::{IO_BUFFER_SIZE, SYMBOL_COUNT};
use crate::types::PreconditionError;

/// Occurrence count per byte value.
///
/// Iteration is always in ascending symbol order, so tree construction sees
/// the same sequence for the same input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
    total: u64,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { counts: [0u64; SYMBOL_COUNT], total: 0 }
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.update(data);
        table
    }

    /// Build a table from explicit `(symbol, count)` pairs. Zero counts are skipped.
    ///
    /// The grand total must fit in a `u64`; every tree weight is bounded by it.
    pub fn from_counts<I>(pairs: I) -> Result<Self, PreconditionError>
    where
        I: IntoIterator<Item = (u8, u64)>,
    {
        let mut table = Self::new();
        for (symbol, count) in pairs {
            table.total = table.total.checked_add(count).ok_or(PreconditionError::CountOverflow)?;
            // bounded by total
            table.counts[symbol as usize] += count;
        }
        Ok(table)
    }

    /// Scan a reader to the end, returning the table and the CRC32 of everything read.
    pub fn from_reader<R: Read>(reader: &mut R) -> io::Result<(Self, u32)> {
        let mut table = Self::new();
        let mut crc = crc32fast::Hasher::new();
        let mut buf = vec![0u8; IO_BUFFER_SIZE];
        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            table.update(&buf[..n]);
            crc.update(&buf[..n]);
        }
        Ok((table, crc.finalize()))
    }

    pub fn update(&mut self, chunk: &[u8]) {
        for &b in chunk {
            self.counts[b as usize] += 1;
        }
        self.total += chunk.len() as u64;
    }

    #[inline]
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total number of symbols scanned.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of symbols with a nonzero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Nonzero `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn counts_each_symbol() {
        let t = FrequencyTable::from_bytes(b"aaabbc");
        assert_eq!(t.count(b'a'), 3);
        assert_eq!(t.count(b'b'), 2);
        assert_eq!(t.count(b'c'), 1);
        assert_eq!(t.count(b'z'), 0);
        assert_eq!(t.total(), 6);
        assert_eq!(t.distinct(), 3);
    }

    #[test]
    fn iter_is_sorted_by_symbol() {
        let t = FrequencyTable::from_bytes(b"zyxzy");
        let pairs: Vec<_> = t.iter().collect();
        assert_eq!(pairs, vec![(b'x', 1), (b'y', 2), (b'z', 2)]);
    }

    #[test]
    fn reader_scan_matches_slice_scan() {
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
        let (t, crc) = FrequencyTable::from_reader(&mut Cursor::new(&data)).unwrap();
        assert_eq!(t, FrequencyTable::from_bytes(&data));
        assert_eq!(crc, crate::utils::compute_crc32(&data));
    }

    #[test]
    fn explicit_counts_accumulate() {
        let t = FrequencyTable::from_counts([(b'a', 2), (b'b', 0), (b'a', 5)]).unwrap();
        assert_eq!(t.count(b'a'), 7);
        assert_eq!(t.distinct(), 1);
        assert_eq!(t.total(), 7);
    }

    #[test]
    fn overflowing_counts_are_rejected() {
        let err = FrequencyTable::from_counts([(0, u64::MAX), (1, 1)]).unwrap_err();
        assert!(matches!(err, PreconditionError::CountOverflow));
    }

    #[test]
    fn empty_input_is_empty() {
        let t = FrequencyTable::from_bytes(b"");
        assert!(t.is_empty());
        assert_eq!(t.iter().count(), 0);
    }
}
