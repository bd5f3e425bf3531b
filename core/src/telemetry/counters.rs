//! telemetry/counters.rs
//! Byte and bit counters collected during a run.
//!
//! Converted into an immutable `TelemetrySnapshot` when the run ends.

#[derive(Default, Clone, Debug, PartialEq)]
pub struct TelemetryCounters {
    /// Original bytes (encode input, decode output).
    pub bytes_original: u64,
    /// Artifact bytes (encode output, decode input).
    pub bytes_artifact: u64,
    /// Preamble + code table + bit length field.
    pub bytes_overhead: u64,
    /// Meaningful payload bits.
    pub payload_bits: u64,
    pub table_entries: u64,
    pub max_code_len: u64,
}

impl TelemetryCounters {
    /// Record the bytes written or read ahead of the payload.
    pub fn add_overhead(&mut self, len: usize) {
        self.bytes_overhead += len as u64;
        self.bytes_artifact += len as u64;
    }

    pub fn add_table(&mut self, entries: usize, max_code_len: usize) {
        self.table_entries = entries as u64;
        self.max_code_len = max_code_len as u64;
    }

    /// Record the packed payload: `bits` meaningful bits in `ceil(bits / 8)` bytes.
    pub fn add_payload(&mut self, bits: u64) {
        self.payload_bits += bits;
        self.bytes_artifact += crate::utils::packed_len(bits);
    }

    pub fn add_original(&mut self, len: u64) {
        self.bytes_original += len;
    }
}
