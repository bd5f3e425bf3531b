//! codec/types.rs
//! Parameters and intermediate products of encoding.

use crate::codes::{CodeStyle, CodeTable};
use crate::headers::ArtifactHeader;
use crate::utils::packed_len;

/// Encoder knobs. `Default` gives tree codes with a CRC32 of the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeParams {
    pub code_style: CodeStyle,
    /// Store a CRC32 of the original bytes and verify it on decode.
    pub checksum: bool,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            code_style: CodeStyle::Tree,
            checksum: true,
        }
    }
}

impl EncodeParams {
    pub fn canonical() -> Self {
        Self { code_style: CodeStyle::Canonical, ..Default::default() }
    }
}

/// Everything decided before the first payload bit is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodePlan {
    pub header: ArtifactHeader,
    pub code_table: CodeTable,
    /// Known up front from the frequencies, so the header can precede the payload.
    pub bit_length: u64,
}

/// Code table plus packed payload, without the preamble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPayload {
    pub code_table: CodeTable,
    pub bit_length: u64,
    pub packed_bytes: Vec<u8>,
}

impl EncodedPayload {
    /// `packed_bytes.len() == ceil(bit_length / 8)`.
    pub fn is_consistent(&self) -> bool {
        self.packed_bytes.len() as u64 == packed_len(self.bit_length)
    }
}

/// Run-level options shared by encode and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Record per-stage timings in the telemetry snapshot.
    /// - `None` or `Some(false)` → totals only (default).
    /// - `Some(true)` → per-stage timers.
    pub collect_metrics: Option<bool>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { collect_metrics: Some(false) }
    }
}

impl ApiConfig {
    pub fn new(collect_metrics: Option<bool>) -> Self {
        Self { collect_metrics: collect_metrics.or(Some(false)) }
    }

    pub fn with_metrics() -> Self {
        Self { collect_metrics: Some(true) }
    }

    pub fn stages_enabled(&self) -> bool {
        self.collect_metrics.unwrap_or(false)
    }
}
