//! api.rs
//! Stable file-level entry points.

use std::io::Read;

use log::{debug, info};

use crate::codec::{self, ApiConfig, ArtifactPrefix, EncodeParams};
use crate::io::{open_input, open_input_stream, open_output, remaining_len, InputSource, OutputSink};
use crate::telemetry::{Stage, TelemetrySnapshot};
use crate::types::Result;

/// Result of a file-level run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub snapshot: TelemetrySnapshot,
    /// Collected bytes when the sink was `OutputSink::Memory`.
    pub output: Option<Vec<u8>>,
}

/// Encode `input` into `output`.
///
/// File outputs appear only after the whole artifact is written.
pub fn encode_file(
    input: InputSource,
    output: OutputSink,
    params: EncodeParams,
    config: ApiConfig,
) -> Result<RunOutput> {
    let mut reader = open_input(input)?;
    debug!("encode input: {} bytes, {:?}", remaining_len(&mut reader)?, params);

    let mut writer = open_output(output)?;
    let mut snapshot = codec::encode_stream(&mut reader, &mut writer, &params, &config)?;

    let started = std::time::Instant::now();
    let output = writer.commit()?;
    if config.stages_enabled() {
        *snapshot.stage_ms.entry(Stage::Write.to_string()).or_insert(0.0) +=
            started.elapsed().as_secs_f64() * 1_000.0;
    }

    info!(
        "encoded {} bytes into {} bytes (ratio {:.3})",
        snapshot.bytes_original, snapshot.bytes_artifact, snapshot.compression_ratio
    );
    Ok(RunOutput { snapshot, output })
}

/// Decode the artifact in `input` into `output`.
///
/// Any structural error, length mismatch or checksum mismatch aborts the run
/// before a file output is published.
pub fn decode_file(input: InputSource, output: OutputSink, config: ApiConfig) -> Result<RunOutput> {
    let mut reader = open_input_stream(input)?;
    let mut writer = open_output(output)?;
    let snapshot = codec::decode_stream(&mut reader, &mut writer, &config)?;
    let output = writer.commit()?;

    info!(
        "decoded {} bytes from {} bytes",
        snapshot.bytes_original, snapshot.bytes_artifact
    );
    Ok(RunOutput { snapshot, output })
}

/// Read preamble, code table and bit length without touching the payload.
pub fn read_artifact_header<R: Read>(reader: &mut R) -> Result<ArtifactPrefix> {
    codec::read_artifact_prefix(reader)
}

/// `read_artifact_header` over any input source.
pub fn inspect(input: InputSource) -> Result<ArtifactPrefix> {
    let mut reader = open_input_stream(input)?;
    read_artifact_header(&mut reader)
}
