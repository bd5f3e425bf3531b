//! codes/table.rs
//! Symbol → code mapping.

use std::collections::BTreeMap;

use crate::codes::code::Code;
use crate::frequency::FrequencyTable;
use crate::types::PreconditionError;

/// How codes are assigned once the tree fixes their lengths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CodeStyle {
    /// Root-to-leaf path of each symbol.
    #[default]
    Tree,
    /// Same lengths, codes reassigned in (length, symbol) order.
    Canonical,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code, returning the previous one for the symbol if any.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    #[inline]
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Code lengths in symbol order.
    pub fn lengths(&self) -> BTreeMap<u8, usize> {
        self.codes.iter().map(|(&s, c)| (s, c.len())).collect()
    }

    /// No code is empty and no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        if codes.iter().any(|c| c.is_empty()) {
            return false;
        }
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                if a.is_prefix_of(b) || b.is_prefix_of(a) {
                    return false;
                }
            }
        }
        true
    }

    /// Payload size in bits for input with these frequencies.
    pub fn encoded_bits(&self, freq: &FrequencyTable) -> Result<u64, PreconditionError> {
        freq.iter().try_fold(0u64, |acc, (symbol, count)| {
            let code = self.get(symbol).ok_or(PreconditionError::MissingCode(symbol))?;
            count
                .checked_mul(code.len() as u64)
                .and_then(|bits| acc.checked_add(bits))
                .ok_or(PreconditionError::BitLengthOverflow)
        })
    }
}
