//! End-to-end properties of the full pipeline.

use bitvec::prelude::*;
use proptest::prelude::*;

use huffpack::bits;
use huffpack::model::{symbols_from_bytes, FrequencyModel};
use huffpack::{CodeTable, HuffmanCodec, HuffmanTree};

proptest! {
    // decode(encode(x)) == x over the whole alphabet, single-symbol
    // inputs included
    #[test]
    fn round_trip_is_exact(input in prop::collection::vec(0u8..128, 1..600)) {
        let codec = HuffmanCodec::from_bytes(&input).unwrap();
        let packed = codec.encode_bytes(&input).unwrap();
        prop_assert_eq!(codec.decode_bytes(&packed).unwrap(), input);
    }

    #[test]
    fn repeated_single_symbol_round_trips(symbol in 0u8..128, len in 1usize..200) {
        let input = vec![symbol; len];
        let codec = HuffmanCodec::from_bytes(&input).unwrap();
        let packed = codec.encode_bytes(&input).unwrap();
        prop_assert_eq!(codec.decode_bytes(&packed).unwrap(), input);
    }

    // padding always adds the partial byte, never loses or invents bits
    #[test]
    fn padding_is_invertible(payload in prop::collection::vec(any::<bool>(), 0..256)) {
        let payload: BitVec<u8, Msb0> = payload.into_iter().collect();
        let packed = bits::pack(&payload);
        prop_assert_eq!(packed.len(), payload.len() / 8 + 1);
        prop_assert_eq!(bits::unpack(&packed).unwrap(), payload);
    }

    #[test]
    fn no_code_is_a_prefix_of_another(input in prop::collection::vec(0u8..128, 2..400)) {
        let model = FrequencyModel::from_bytes(&input).unwrap();
        let tree = HuffmanTree::from_model(&model).unwrap();
        let table = CodeTable::from_tree(&tree);
        let codes: Vec<_> = table.iter().collect();
        for (i, (_, a)) in codes.iter().enumerate() {
            for (j, (_, b)) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!a.starts_with(b));
                }
            }
        }
    }

    #[test]
    fn identical_inputs_produce_identical_tables(input in prop::collection::vec(0u8..128, 1..300)) {
        let first = CodeTable::from_tree(
            &HuffmanTree::from_model(&FrequencyModel::from_bytes(&input).unwrap()).unwrap(),
        );
        let second = CodeTable::from_tree(
            &HuffmanTree::from_model(&FrequencyModel::from_bytes(&input).unwrap()).unwrap(),
        );
        prop_assert_eq!(first, second);
    }
}

#[test]
fn packed_blob_survives_the_disk() {
    let dir = tempfile::tempdir().unwrap();
    let text = b"the quick brown fox jumps over the lazy dog";
    let symbols = symbols_from_bytes(text).unwrap();
    let codec = HuffmanCodec::from_symbols(&symbols).unwrap();

    let path = dir.path().join("fox.huff");
    huffpack::persist::write_packed(&path, &codec.encode(&symbols).unwrap()).unwrap();

    let blob = huffpack::persist::read_packed(&path).unwrap();
    assert_eq!(codec.decode(&blob).unwrap(), symbols);
}
