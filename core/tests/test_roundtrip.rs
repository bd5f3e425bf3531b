// Encode → decode round trips and payload sizing.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use huffman_core::codes::CodeStyle;
    use huffman_core::headers::{ArtifactHeader, HeaderFlags};
    use huffman_core::utils::{compute_crc32, packed_len};
    use huffman_core::{
        decode, decode_payload, encode, encode_payload, parse_artifact, EncodeParams,
    };

    const STYLES: [CodeStyle; 2] = [CodeStyle::Tree, CodeStyle::Canonical];

    fn params(code_style: CodeStyle) -> EncodeParams {
        EncodeParams { code_style, ..Default::default() }
    }

    #[test]
    fn aaabbc_artifact_layout() {
        let artifact = encode(b"aaabbc", &EncodeParams::default()).unwrap();
        // 18 preamble + (2 + 3 * 3) table + 8 bit length + 2 payload
        assert_eq!(artifact.len(), 39);
        assert_eq!(&artifact[0..4], b"HUF1");

        let (header, payload) = parse_artifact(&artifact).unwrap();
        assert_eq!(header.original_len, 6);
        assert_eq!(header.crc32, compute_crc32(b"aaabbc"));
        assert_eq!(header.flags, HeaderFlags::HAS_CRC32);
        assert_eq!(payload.bit_length, 9);
        assert_eq!(payload.packed_bytes, vec![0b0001_1111, 0b0000_0000]);

        assert_eq!(decode(&artifact).unwrap(), b"aaabbc");
    }

    #[test]
    fn single_symbol_round_trip() {
        for style in STYLES {
            let data = vec![b'x'; 1000];
            let artifact = encode(&data, &params(style)).unwrap();
            let (_, payload) = parse_artifact(&artifact).unwrap();
            assert_eq!(payload.bit_length, 1000);
            assert_eq!(payload.packed_bytes.len(), 125);
            assert_eq!(decode(&artifact).unwrap(), data);
        }
    }

    #[test]
    fn one_byte_input() {
        let artifact = encode(b"\xff", &EncodeParams::default()).unwrap();
        assert_eq!(decode(&artifact).unwrap(), b"\xff");
    }

    #[test]
    fn full_alphabet_round_trip() {
        let data: Vec<u8> = (0..=255u8).cycle().take(256 * 7 + 13).collect();
        for style in STYLES {
            let artifact = encode(&data, &params(style)).unwrap();
            assert_eq!(decode(&artifact).unwrap(), data);
        }
    }

    #[test]
    fn deep_codes_round_trip() {
        // Fibonacci counts push the rarest symbols 19 levels deep.
        let mut fib = vec![1usize, 1];
        while fib.len() < 20 {
            let n = fib[fib.len() - 1] + fib[fib.len() - 2];
            fib.push(n);
        }
        let mut data = Vec::new();
        for (symbol, count) in fib.iter().enumerate() {
            data.extend(std::iter::repeat(symbol as u8).take(*count));
        }
        for style in STYLES {
            let payload = encode_payload(&data, &params(style)).unwrap();
            assert_eq!(payload.code_table.max_len(), 19);
            assert_eq!(decode_payload(&payload).unwrap(), data);

            let artifact = encode(&data, &params(style)).unwrap();
            assert_eq!(decode(&artifact).unwrap(), data);
        }
    }

    #[test]
    fn canonical_flag_is_recorded() {
        let artifact = encode(b"abracadabra", &EncodeParams::canonical()).unwrap();
        let (header, _) = parse_artifact(&artifact).unwrap();
        assert!(header.is_canonical());
        assert!(header.has_crc32());
    }

    #[test]
    fn checksum_can_be_disabled() {
        let p = EncodeParams { checksum: false, ..Default::default() };
        let artifact = encode(b"abracadabra", &p).unwrap();
        let (header, _) = parse_artifact(&artifact).unwrap();
        assert!(!header.has_crc32());
        assert_eq!(header.crc32, 0);
        assert_eq!(decode(&artifact).unwrap(), b"abracadabra");
    }

    #[test]
    fn payload_matches_full_artifact() {
        let data = b"she sells sea shells by the sea shore";
        let payload = encode_payload(data, &EncodeParams::default()).unwrap();
        let artifact = encode(data, &EncodeParams::default()).unwrap();
        let (_, parsed) = parse_artifact(&artifact).unwrap();
        assert_eq!(payload, parsed);
        assert!(payload.is_consistent());
    }

    #[test]
    fn encoding_is_deterministic() {
        let data = b"to be or not to be, that is the question";
        let a = encode(data, &EncodeParams::default()).unwrap();
        let b = encode(data, &EncodeParams::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(ArtifactHeader::LEN, 18);
    }

    proptest! {
        #[test]
        fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 1..4096), canonical in any::<bool>()) {
            let style = if canonical { CodeStyle::Canonical } else { CodeStyle::Tree };
            let artifact = encode(&data, &params(style)).unwrap();
            prop_assert_eq!(decode(&artifact).unwrap(), data);
        }

        #[test]
        fn prop_skewed_round_trip(data in proptest::collection::vec(prop_oneof![8 => Just(b'e'), 2 => Just(b't'), 1 => any::<u8>()], 1..4096)) {
            let artifact = encode(&data, &EncodeParams::default()).unwrap();
            prop_assert_eq!(decode(&artifact).unwrap(), data);
        }

        #[test]
        fn prop_packed_len(data in proptest::collection::vec(any::<u8>(), 1..2048)) {
            let payload = encode_payload(&data, &EncodeParams::default()).unwrap();
            prop_assert_eq!(payload.packed_bytes.len() as u64, packed_len(payload.bit_length));
            prop_assert_eq!(decode_payload(&payload).unwrap(), data);
        }
    }
}
