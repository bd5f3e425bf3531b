// Code assignment: lengths, prefix freedom, canonical reassignment.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use huffman_core::codes::{generate_codes, Code, CodeStyle};
    use huffman_core::frequency::FrequencyTable;
    use huffman_core::tree::HuffmanTree;

    fn codes_for(data: &[u8], style: CodeStyle) -> huffman_core::codes::CodeTable {
        generate_codes(&HuffmanTree::from_bytes(data).unwrap(), style).unwrap()
    }

    #[test]
    fn aaabbc_code_lengths() {
        let table = codes_for(b"aaabbc", CodeStyle::Tree);
        assert_eq!(table.get(b'a').unwrap().len(), 1);
        assert_eq!(table.get(b'b').unwrap().len(), 2);
        assert_eq!(table.get(b'c').unwrap().len(), 2);
        assert_eq!(table.encoded_bits(&FrequencyTable::from_bytes(b"aaabbc")).unwrap(), 9);
    }

    #[test]
    fn single_symbol_gets_nonempty_code() {
        let table = codes_for(b"\x00\x00\x00", CodeStyle::Tree);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0).unwrap().to_string(), "0");
    }

    #[test]
    fn canonical_codes_are_ordered() {
        let table = codes_for(b"aaabbc", CodeStyle::Canonical);
        let rendered: Vec<String> = table.iter().map(|(_, c)| c.to_string()).collect();
        assert_eq!(rendered, ["0", "10", "11"]);
    }

    #[test]
    fn deep_codes_span_several_bytes() {
        let mut fib = vec![1u64, 1];
        while fib.len() < 40 {
            let n = fib[fib.len() - 1] + fib[fib.len() - 2];
            fib.push(n);
        }
        let freq = FrequencyTable::from_counts(fib.iter().enumerate().map(|(i, c)| (i as u8, *c))).unwrap();
        let tree = HuffmanTree::from_frequencies(&freq).unwrap();

        for style in [CodeStyle::Tree, CodeStyle::Canonical] {
            let table = generate_codes(&tree, style).unwrap();
            assert_eq!(table.max_len(), 39);
            assert!(table.is_prefix_free());
            let longest = table.iter().map(|(_, c)| c).max_by_key(|c| c.len()).unwrap();
            assert_eq!(longest.as_bytes().len(), 5);
        }
    }

    #[test]
    fn code_text_round_trip() {
        let code = Code::parse("1011001").unwrap();
        assert_eq!(code.len(), 7);
        assert_eq!(code.to_string(), "1011001");
        assert_eq!(code.as_bytes(), &[0b1011_0010]);
        assert!(Code::parse("10x").is_none());
        assert!(Code::parse("10").unwrap().is_prefix_of(&code));
    }

    proptest! {
        #[test]
        fn prop_prefix_free(data in proptest::collection::vec(any::<u8>(), 1..1024)) {
            let tree = HuffmanTree::from_bytes(&data).unwrap();
            for style in [CodeStyle::Tree, CodeStyle::Canonical] {
                let table = generate_codes(&tree, style).unwrap();
                prop_assert!(table.is_prefix_free());
                prop_assert_eq!(table.len(), tree.leaf_count());
            }
        }

        #[test]
        fn prop_canonical_keeps_lengths(data in proptest::collection::vec(any::<u8>(), 1..1024)) {
            let tree = HuffmanTree::from_bytes(&data).unwrap();
            let tree_lens = generate_codes(&tree, CodeStyle::Tree).unwrap().lengths();
            let canon_lens = generate_codes(&tree, CodeStyle::Canonical).unwrap().lengths();
            prop_assert_eq!(tree_lens, canon_lens);
        }
    }
}
