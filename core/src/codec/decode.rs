//! codec/decode.rs
//! Artifact parsing and payload decoding.
//!
//! Notes:
//! - Output is streamed to the writer as symbols complete; callers that need
//!   all-or-nothing semantics write to a temporary sink (see `io.rs`).
//! - Every structural check (trailing bytes, length, checksum) runs before
//!   `decode_stream` returns `Ok`.

use std::io::{Cursor, Read, Write};

use log::debug;

use crate::bitstream::BitReader;
use crate::codec::trie::{DecodeTrie, Step};
use crate::codec::types::{ApiConfig, EncodedPayload};
use crate::codes::CodeTable;
use crate::headers::{
    code_table_len, read_bit_length, read_code_table, read_header, ArtifactHeader, FormatError,
    HEADER_LEN_V1,
};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::Result;

const OUT_BATCH: usize = 8 * 1024;

/// Everything that precedes the packed payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPrefix {
    pub header: ArtifactHeader,
    pub code_table: CodeTable,
    pub bit_length: u64,
}

impl ArtifactPrefix {
    /// Bytes occupied by preamble, code table and bit length field.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN_V1 + code_table_len(&self.code_table) + 8
    }
}

/// Read and validate preamble, code table and bit length.
pub fn read_artifact_prefix<R: Read>(r: &mut R) -> Result<ArtifactPrefix> {
    let header = read_header(r)?;
    let code_table = read_code_table(r)?;
    let bit_length = read_bit_length(r)?;
    Ok(ArtifactPrefix { header, code_table, bit_length })
}

/// Walk `bits` through `trie`, writing each completed symbol to `out`.
///
/// Returns the number of symbols written and the CRC32 of those bytes.
pub fn decode_symbols<R: Read, W: Write>(
    bits: &mut BitReader<R>,
    trie: &DecodeTrie,
    out: &mut W,
) -> Result<(u64, u32)> {
    let mut hasher = crc32fast::Hasher::new();
    let mut batch = Vec::with_capacity(OUT_BATCH);
    let mut count = 0u64;
    let mut at = DecodeTrie::ROOT;

    while let Some(bit) = bits.next_bit()? {
        match trie.step(at, bit) {
            Step::Partial(next) => at = next,
            Step::Symbol(symbol) => {
                batch.push(symbol);
                at = DecodeTrie::ROOT;
                if batch.len() == OUT_BATCH {
                    hasher.update(&batch);
                    out.write_all(&batch)?;
                    count += batch.len() as u64;
                    batch.clear();
                }
            }
            Step::Dead => {
                return Err(FormatError::UnknownCode { bit_offset: bits.consumed() - 1 }.into());
            }
        }
    }

    if at != DecodeTrie::ROOT {
        return Err(FormatError::IncompleteCode { bit_length: bits.consumed() }.into());
    }

    hasher.update(&batch);
    out.write_all(&batch)?;
    count += batch.len() as u64;
    Ok((count, hasher.finalize()))
}

/// Decode a complete artifact from `reader` into `writer`.
pub fn decode_stream<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    config: &ApiConfig,
) -> Result<TelemetrySnapshot> {
    let mut timer = TelemetryTimer::with_stages(config.stages_enabled());
    let mut counters = TelemetryCounters::default();

    let (prefix, trie) = timer.measure(Stage::Read, || -> Result<_> {
        let prefix = read_artifact_prefix(reader)?;
        let trie = DecodeTrie::from_table(&prefix.code_table)?;
        Ok((prefix, trie))
    })?;
    counters.add_overhead(prefix.encoded_len());
    counters.add_table(prefix.code_table.len(), prefix.code_table.max_len());

    debug!(
        "artifact: {} symbols, {} codes, {} payload bits, flags {:?}",
        prefix.header.original_len,
        prefix.code_table.len(),
        prefix.bit_length,
        prefix.header.flags
    );

    let (count, crc32) = timer.measure(Stage::Decode, || -> Result<_> {
        let mut bits = BitReader::new(&mut *reader, prefix.bit_length);
        let decoded = decode_symbols(&mut bits, &trie, writer)?;
        bits.finish()?;
        Ok(decoded)
    })?;

    if count != prefix.header.original_len {
        return Err(FormatError::LengthMismatch {
            expected: prefix.header.original_len,
            actual: count,
        }
        .into());
    }
    if prefix.header.has_crc32() && crc32 != prefix.header.crc32 {
        return Err(FormatError::ChecksumMismatch {
            expected: prefix.header.crc32,
            actual: crc32,
        }
        .into());
    }

    counters.add_payload(prefix.bit_length);
    counters.add_original(count);
    timer.finish();
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

/// Decode a complete in-memory artifact.
pub fn decode(artifact: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decode_stream(&mut Cursor::new(artifact), &mut out, &ApiConfig::default())?;
    Ok(out)
}

/// Decode a code table plus packed payload produced by `encode_payload`.
pub fn decode_payload(payload: &EncodedPayload) -> Result<Vec<u8>> {
    let trie = DecodeTrie::from_table(&payload.code_table)?;
    let mut bits = BitReader::new(payload.packed_bytes.as_slice(), payload.bit_length);
    let mut out = Vec::new();
    decode_symbols(&mut bits, &trie, &mut out)?;
    bits.finish()?;
    Ok(out)
}

/// Split an in-memory artifact into its preamble and payload parts
/// without decoding any symbols.
pub fn parse_artifact(artifact: &[u8]) -> Result<(ArtifactHeader, EncodedPayload)> {
    let mut cursor = Cursor::new(artifact);
    let prefix = read_artifact_prefix(&mut cursor)?;

    let start = cursor.position() as usize;
    let need = crate::utils::packed_len(prefix.bit_length);
    let have = (artifact.len() - start) as u64;
    if have < need {
        return Err(FormatError::Truncated { context: "payload" }.into());
    }
    if have > need {
        return Err(FormatError::TrailingData.into());
    }

    let payload = EncodedPayload {
        code_table: prefix.code_table,
        bit_length: prefix.bit_length,
        packed_bytes: artifact[start..].to_vec(),
    };
    Ok((prefix.header, payload))
}
