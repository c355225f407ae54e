use huffman_tree_compression::{compress, decode, decompress, encode, encode_bits, CodeTable, Error, FrequencyTable};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(input in prop::collection::vec(any::<u8>(), 1..500)) {
        let table = CodeTable::build(input.iter().copied()).unwrap();
        let encoded = encode(&input, &table).unwrap();

        prop_assert_eq!(decode(&encoded, &table).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_skewed(input in prop::collection::vec(prop_oneof![8 => Just(0u8), 2 => 1..4u8, 1 => any::<u8>()], 1..500)) {
        let compressed = compress(input.iter().copied()).unwrap();

        prop_assert_eq!(decompress::<u8>(&compressed).unwrap().into_vec(), input);
    }

    #[test]
    fn test_roundtrip_text(text in "\\PC{1,200}") {
        let compressed = compress(text.chars()).unwrap();
        let decompressed: String = decompress::<char>(&compressed).unwrap().iter().collect();

        prop_assert_eq!(decompressed, text);
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(0..40u8, 1..300)) {
        let table = CodeTable::build(input).unwrap();

        for (a, code_a) in table.iter() {
            prop_assert!(code_a.len() >= 1);
            for (b, code_b) in table.iter() {
                if a != b {
                    prop_assert!(!code_a.is_prefix_of(code_b));
                }
            }
        }
    }

    #[test]
    fn test_determinism(input in prop::collection::vec(0..16u8, 1..300)) {
        let frequencies = FrequencyTable::count(input.iter().copied()).unwrap();

        let first = CodeTable::from_frequencies(&frequencies);
        let second = CodeTable::from_frequencies(&frequencies.clone());

        for (symbol, code) in first.iter() {
            prop_assert_eq!(second.code(symbol), Some(code));
        }
        prop_assert_eq!(
            compress(input.iter().copied()).unwrap(),
            compress(input.iter().copied()).unwrap()
        );
    }

    #[test]
    fn test_byte_alignment(input in prop::collection::vec(any::<u8>(), 1..300)) {
        let table = CodeTable::build(input.iter().copied()).unwrap();
        let bits = encode_bits(&input, &table).unwrap();
        let encoded = encode(&input, &table).unwrap();

        prop_assert!(encoded[0] <= 7);
        prop_assert_eq!((encoded.len() - 1) * 8, bits.len_bits() + encoded[0] as usize);
    }

    #[test]
    fn test_truncation_detected(input in prop::collection::vec(0..8u8, 1..300)) {
        let table = CodeTable::build(input.iter().copied()).unwrap();
        let encoded = encode(&input, &table).unwrap();

        let err = decode(&encoded[..encoded.len() - 1], &table).unwrap_err();
        let is_decoding_error = matches!(err, Error::Decoding(_));
        prop_assert!(is_decoding_error, "unexpected error {:?}", err);
    }
}
