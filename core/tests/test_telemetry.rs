// Run statistics collected by encode_stream / decode_stream.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use huffman_core::telemetry::{Stage, TelemetrySnapshot};
    use huffman_core::{decode_stream, encode_stream, ApiConfig, EncodeParams};

    fn run(data: &[u8], config: &ApiConfig) -> (Vec<u8>, TelemetrySnapshot, TelemetrySnapshot) {
        let mut artifact = Vec::new();
        let enc = encode_stream(&mut Cursor::new(data), &mut artifact, &EncodeParams::default(), config)
            .unwrap();
        let mut restored = Vec::new();
        let dec = decode_stream(&mut Cursor::new(&artifact), &mut restored, config).unwrap();
        assert_eq!(restored, data);
        (artifact, enc, dec)
    }

    #[test]
    fn encode_and_decode_agree() {
        let (artifact, enc, dec) = run(b"aaabbc", &ApiConfig::default());

        assert_eq!(enc.bytes_original, 6);
        assert_eq!(enc.bytes_artifact, artifact.len() as u64);
        assert_eq!(enc.bytes_overhead, 37);
        assert_eq!(enc.payload_bits, 9);
        assert_eq!(enc.table_entries, 3);
        assert_eq!(enc.max_code_len, 2);
        assert!((enc.bits_per_symbol - 1.5).abs() < 1e-9);

        assert_eq!(dec.bytes_original, enc.bytes_original);
        assert_eq!(dec.bytes_artifact, enc.bytes_artifact);
        assert_eq!(dec.bytes_overhead, enc.bytes_overhead);
        assert_eq!(dec.payload_bits, enc.payload_bits);
        assert!(enc.sanity_check());
        assert!(dec.sanity_check());
    }

    #[test]
    fn stages_only_when_enabled() {
        let data = b"stage timing should only appear when asked for";

        let (_, enc, dec) = run(data, &ApiConfig::default());
        assert!(enc.stage_ms.is_empty());
        assert!(dec.stage_ms.is_empty());

        let (_, enc, dec) = run(data, &ApiConfig::with_metrics());
        for stage in [Stage::Count, Stage::Build, Stage::Write, Stage::Encode] {
            assert!(enc.stage_ms.contains_key(&stage.to_string()), "missing {stage}");
        }
        for stage in [Stage::Read, Stage::Decode] {
            assert!(dec.stage_ms.contains_key(&stage.to_string()), "missing {stage}");
        }
        assert!(enc.total_stage_time() <= enc.elapsed);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let (_, enc, _) = run(b"json please", &ApiConfig::with_metrics());
        let json = enc.to_json().unwrap();
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bytes_artifact, enc.bytes_artifact);
        assert_eq!(back.payload_bits, enc.payload_bits);
        assert!(json.contains("\"compression_ratio\""));
    }

    #[test]
    fn config_defaults() {
        assert_eq!(ApiConfig::default().collect_metrics, Some(false));
        assert_eq!(ApiConfig::new(None).collect_metrics, Some(false));
        assert!(ApiConfig::new(Some(true)).stages_enabled());
    }
}
