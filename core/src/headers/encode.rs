//! headers/encode.rs
//!
//! Writers for everything that precedes the payload.
//!
//! Design notes:
//! - Field order must match `decode.rs` exactly.
//! - Code table entries go out in ascending symbol order, so equal tables
//!   serialize to equal bytes.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::codes::CodeTable;
use crate::headers::types::{ArtifactHeader, HEADER_LEN_V1};

/// Serialize the preamble into its fixed 18-byte form.
#[inline]
pub fn encode_header_le(h: &ArtifactHeader) -> [u8; HEADER_LEN_V1] {
    let mut out = [0u8; HEADER_LEN_V1];
    out[0..4].copy_from_slice(&h.magic);                      // 0..4   magic
    out[4] = h.version;                                       // 4      version
    out[5] = h.flags.bits();                                  // 5      flags
    out[6..10].copy_from_slice(&h.crc32.to_le_bytes());       // 6..10  crc32
    out[10..18].copy_from_slice(&h.original_len.to_le_bytes()); // 10..18 original_len
    out
}

pub fn write_header<W: Write>(w: &mut W, h: &ArtifactHeader) -> std::io::Result<usize> {
    w.write_all(&encode_header_le(h))?;
    Ok(HEADER_LEN_V1)
}

/// Write `code_table_size` then one `{ symbol, code_length, code_bits }` entry
/// per symbol. Returns the number of bytes written.
///
/// Layout:
///
/// ```text
/// [ code_table_size (2) ]
/// repeat code_table_size:
///   [ symbol (1) ][ code_length (1) ][ code_bits (ceil(code_length / 8)) ]
/// ```
pub fn write_code_table<W: Write>(w: &mut W, table: &CodeTable) -> std::io::Result<usize> {
    let mut written = 2;
    w.write_u16::<LittleEndian>(table.len() as u16)?;
    for (symbol, code) in table.iter() {
        w.write_u8(symbol)?;
        w.write_u8(code.len() as u8)?;
        w.write_all(code.as_bytes())?;
        written += 2 + code.as_bytes().len();
    }
    Ok(written)
}

pub fn write_bit_length<W: Write>(w: &mut W, bit_length: u64) -> std::io::Result<usize> {
    w.write_u64::<LittleEndian>(bit_length)?;
    Ok(8)
}

/// Serialized size of a code table, including its size field.
pub fn code_table_len(table: &CodeTable) -> usize {
    2 + table.iter().map(|(_, code)| 2 + code.as_bytes().len()).sum::<usize>()
}
