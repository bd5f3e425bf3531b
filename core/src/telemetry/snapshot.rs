//! telemetry/snapshot.rs
//! Immutable summary of one encode or decode run.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::TelemetryTimer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub bytes_original: u64,
    pub bytes_artifact: u64,
    pub bytes_overhead: u64,
    pub payload_bits: u64,
    pub table_entries: u64,
    pub max_code_len: u64,
    /// `bytes_artifact / bytes_original`; above 1.0 when the artifact grew.
    pub compression_ratio: f64,
    /// Average code length weighted by frequency.
    pub bits_per_symbol: f64,
    pub elapsed: Duration,
    /// Stage name → milliseconds.
    pub stage_ms: BTreeMap<String, f64>,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let ratio = if counters.bytes_original > 0 {
            counters.bytes_artifact as f64 / counters.bytes_original as f64
        } else {
            0.0
        };
        let bits_per_symbol = if counters.bytes_original > 0 {
            counters.payload_bits as f64 / counters.bytes_original as f64
        } else {
            0.0
        };
        let stage_ms = timer
            .stages()
            .iter()
            .map(|(stage, dur)| (stage.to_string(), dur.as_secs_f64() * 1_000.0))
            .collect();

        Self {
            bytes_original: counters.bytes_original,
            bytes_artifact: counters.bytes_artifact,
            bytes_overhead: counters.bytes_overhead,
            payload_bits: counters.payload_bits,
            table_entries: counters.table_entries,
            max_code_len: counters.max_code_len,
            compression_ratio: ratio,
            bits_per_symbol,
            elapsed: timer.elapsed(),
            stage_ms,
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        Duration::from_secs_f64(self.stage_ms.values().sum::<f64>() / 1_000.0)
    }

    /// Payload size must agree with its bit count.
    pub fn sanity_check(&self) -> bool {
        self.bytes_artifact == self.bytes_overhead + crate::utils::packed_len(self.payload_bits)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
