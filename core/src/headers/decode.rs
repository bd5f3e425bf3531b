//! headers/decode.rs
//!
//! Readers for everything that precedes the payload.
//!
//! Design notes:
//! - Field order must match `encode.rs` exactly.
//! - Running out of input anywhere here is `FormatError::Truncated`.
//! - Validation happens as fields are read, so a bad artifact fails before
//!   any payload bit is touched.

use std::io::Read;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use crate::codes::{Code, CodeTable};
use crate::constants::{MAX_CODE_LEN, SYMBOL_COUNT};
use crate::headers::types::{ArtifactHeader, FormatError, HeaderFlags, HEADER_LEN_V1};
use crate::types::{HuffmanError, Result};

/// Deserialize and validate the fixed 18-byte preamble.
#[inline]
pub fn decode_header_le(buf: &[u8]) -> std::result::Result<ArtifactHeader, FormatError> {
    if buf.len() < HEADER_LEN_V1 {
        return Err(FormatError::Truncated { context: "header" });
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&buf[0..4]);                          // 0..4   magic
    let version = buf[4];                                       // 4      version
    let raw_flags = buf[5];                                     // 5      flags
    let crc32 = LittleEndian::read_u32(&buf[6..10]);            // 6..10  crc32
    let original_len = LittleEndian::read_u64(&buf[10..18]);    // 10..18 original_len

    let flags = HeaderFlags::from_bits(raw_flags)
        .ok_or(FormatError::UnknownFlags { raw: raw_flags })?;

    let h = ArtifactHeader { magic, version, flags, crc32, original_len };
    h.validate()?;
    Ok(h)
}

pub fn read_header<R: Read>(r: &mut R) -> Result<ArtifactHeader> {
    let mut buf = [0u8; HEADER_LEN_V1];
    r.read_exact(&mut buf)
        .map_err(|e| HuffmanError::from_parse_io(e, "header"))?;
    Ok(decode_header_le(&buf)?)
}

/// Read the code table, rejecting sizes outside 1..=256, code lengths
/// outside 1..=255 and repeated symbols. Prefix conflicts between codes are
/// caught when the decode trie is built.
pub fn read_code_table<R: Read>(r: &mut R) -> Result<CodeTable> {
    let eof = |e: std::io::Error| HuffmanError::from_parse_io(e, "code table");

    let size = r.read_u16::<LittleEndian>().map_err(eof)?;
    if size == 0 || size as usize > SYMBOL_COUNT {
        return Err(FormatError::InvalidTableSize { have: size }.into());
    }

    let mut table = CodeTable::new();
    let mut packed = [0u8; 32];
    for _ in 0..size {
        let symbol = r.read_u8().map_err(eof)?;
        let len = r.read_u8().map_err(eof)?;
        if len == 0 || len as usize > MAX_CODE_LEN {
            return Err(FormatError::InvalidCodeLength { symbol, len }.into());
        }

        let n = (len as usize).div_ceil(8);
        r.read_exact(&mut packed[..n]).map_err(eof)?;
        let code = Code::from_packed(len, &packed[..n])
            .ok_or(FormatError::InvalidCodeLength { symbol, len })?;

        if table.insert(symbol, code).is_some() {
            return Err(FormatError::DuplicateSymbol { symbol }.into());
        }
    }
    Ok(table)
}

pub fn read_bit_length<R: Read>(r: &mut R) -> Result<u64> {
    r.read_u64::<LittleEndian>()
        .map_err(|e| HuffmanError::from_parse_io(e, "bit length"))
}
