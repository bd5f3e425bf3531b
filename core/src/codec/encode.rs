//! codec/encode.rs
//! Two-pass encoder: count, plan, then stream the payload.

use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use log::{debug, trace};

use crate::bitstream::BitWriter;
use crate::codec::types::{ApiConfig, EncodeParams, EncodePlan, EncodedPayload};
use crate::codes::{generate_codes, CodeStyle, CodeTable};
use crate::constants::IO_BUFFER_SIZE;
use crate::frequency::FrequencyTable;
use crate::headers::{write_bit_length, write_code_table, write_header, ArtifactHeader};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::tree::HuffmanTree;
use crate::types::{HuffmanError, PreconditionError, Result};
use crate::utils::fmt_symbol;

/// Build the tree and code table, and size the payload.
///
/// Fails with `EmptyInput` when `freq` holds no symbols.
pub fn plan_encoding(freq: &FrequencyTable, crc32: u32, params: &EncodeParams) -> Result<EncodePlan> {
    let tree = HuffmanTree::from_frequencies(freq)?;
    debug_assert!(tree.validate(), "internal node weight != sum of children");

    let code_table = generate_codes(&tree, params.code_style)?;
    let bit_length = code_table.encoded_bits(freq)?;

    let mut header = ArtifactHeader::new(freq.total());
    if params.checksum {
        header.set_crc32(crc32);
    }
    if params.code_style == CodeStyle::Canonical {
        header.set_canonical();
    }

    debug!(
        "planned {} symbols, {} distinct, tree depth {}, {} payload bits",
        freq.total(),
        code_table.len(),
        tree.depth(),
        bit_length
    );
    for (symbol, code) in code_table.iter() {
        trace!("{} x{} -> {}", fmt_symbol(symbol), freq.count(symbol), code);
    }

    Ok(EncodePlan { header, code_table, bit_length })
}

/// Write preamble, code table and bit length. Returns bytes written.
pub fn write_prefix<W: Write>(w: &mut W, plan: &EncodePlan) -> io::Result<usize> {
    let mut n = write_header(w, &plan.header)?;
    n += write_code_table(w, &plan.code_table)?;
    n += write_bit_length(w, plan.bit_length)?;
    Ok(n)
}

/// Stream every byte of `reader` through its code into `bits`.
pub fn encode_symbols<R: Read, W: Write>(
    reader: &mut R,
    bits: &mut BitWriter<W>,
    table: &CodeTable,
) -> Result<()> {
    let mut buf = vec![0u8; IO_BUFFER_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(HuffmanError::Io(e)),
        };
        for &byte in &buf[..n] {
            let code = table.get(byte).ok_or(PreconditionError::MissingCode(byte))?;
            bits.write_code(code)?;
        }
    }
}

/// Encode a seekable source into `writer`.
///
/// Pass one counts symbols (and the CRC32); pass two rewinds and streams the
/// payload. Memory use depends on the code table, not the input length.
pub fn encode_stream<R, W>(
    reader: &mut R,
    writer: &mut W,
    params: &EncodeParams,
    config: &ApiConfig,
) -> Result<TelemetrySnapshot>
where
    R: Read + Seek,
    W: Write,
{
    let mut timer = TelemetryTimer::with_stages(config.stages_enabled());
    let mut counters = TelemetryCounters::default();

    let start = reader.stream_position()?;
    let (freq, crc32) = timer.measure(Stage::Count, || FrequencyTable::from_reader(reader))?;
    let plan = timer.measure(Stage::Build, || plan_encoding(&freq, crc32, params))?;

    let prefix_len = timer.measure(Stage::Write, || write_prefix(writer, &plan))?;
    counters.add_overhead(prefix_len);
    counters.add_table(plan.code_table.len(), plan.code_table.max_len());

    reader.seek(SeekFrom::Start(start))?;
    let written = timer.measure(Stage::Encode, || -> Result<u64> {
        let mut bits = BitWriter::new(&mut *writer);
        encode_symbols(reader, &mut bits, &plan.code_table)?;
        let (_, written) = bits.finish()?;
        Ok(written)
    })?;

    if written != plan.bit_length {
        return Err(PreconditionError::PayloadLengthMismatch {
            planned: plan.bit_length,
            written,
        }
        .into());
    }

    counters.add_payload(written);
    counters.add_original(freq.total());
    timer.finish();

    debug!("encoded {} bytes into {} bytes", counters.bytes_original, counters.bytes_artifact);
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

/// Encode `data` into a complete artifact.
pub fn encode(data: &[u8], params: &EncodeParams) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_stream(&mut Cursor::new(data), &mut out, params, &ApiConfig::default())?;
    Ok(out)
}

/// Encode `data` into a code table plus packed payload, without the preamble.
pub fn encode_payload(data: &[u8], params: &EncodeParams) -> Result<EncodedPayload> {
    let freq = FrequencyTable::from_bytes(data);
    let plan = plan_encoding(&freq, 0, params)?;

    let mut bits = BitWriter::new(Vec::with_capacity(crate::utils::packed_len(plan.bit_length) as usize));
    encode_symbols(&mut Cursor::new(data), &mut bits, &plan.code_table)?;
    let (packed_bytes, bit_length) = bits.finish()?;

    Ok(EncodedPayload {
        code_table: plan.code_table,
        bit_length,
        packed_bytes,
    })
}
