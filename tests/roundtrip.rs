use std::collections::HashSet;
use std::sync::Once;
use std::thread;

use huffcode::{bits, compress, decompress, encode, CodeTable, HuffmanError};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("huffcode=debug")
            .try_init();
    });
}

const INPUTS: &[&str] = &[
    "a",
    "abcd",
    "aaabbbcd",
    "mississippi",
    "the quick brown fox jumps over the lazy dog",
    "née approchée 💾 données 💾",
];

#[test]
fn test_round_trip_various_inputs() {
    init_tracing();
    for &input in INPUTS {
        let (compressed, table) = compress(input).unwrap();
        assert_eq!(compressed.len(), input.chars().count());
        assert_eq!(decompress(&compressed, &table).unwrap(), input, "input {:?}", input);
    }
}

#[test]
fn test_packed_round_trip_various_inputs() {
    init_tracing();
    for &input in INPUTS {
        let (compressed, table) = compress(input).unwrap();
        let packed = bits::pack(&compressed);
        assert_eq!(bits::unpack(&packed, &table).unwrap(), input, "input {:?}", input);
    }
}

#[test]
fn test_every_table_is_prefix_free() {
    init_tracing();
    for &input in INPUTS {
        let (_, table) = compress(input).unwrap();
        for first in table.encode.values() {
            for second in table.encode.values() {
                if first != second {
                    assert!(
                        !second.starts_with(first.as_str()),
                        "{} is a prefix of {} for input {:?}",
                        first,
                        second,
                        input
                    );
                }
            }
        }
    }
}

#[test]
fn test_non_uniform_input_beats_fixed_width() {
    init_tracing();
    let input = "aaaaaaaaaaaaaaaabbbbbbbbccccdde";
    let (compressed, _) = compress(input).unwrap();
    let total_bits: usize = compressed.iter().map(|code| code.len()).sum();
    assert!(total_bits < 8 * input.chars().count());
}

#[test]
fn test_table_survives_json_round_trip() {
    init_tracing();
    let input = "compression is mostly bookkeeping";
    let (compressed, table) = compress(input).unwrap();

    let json = serde_json::to_string(&table).unwrap();
    let restored: CodeTable = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.encode, table.encode);
    assert_eq!(restored.decode, table.decode);
    assert_eq!(decompress(&compressed, &restored).unwrap(), input);
}

#[test]
fn test_foreign_table_is_a_typed_error() {
    init_tracing();
    let (_, table) = compress("abcd").unwrap();
    let (compressed, _) = compress("aaabbbcd").unwrap();
    // "aaabbbcd" uses the one-bit code "1", which the abcd table lacks.
    let result = decompress(&compressed, &table);
    assert!(matches!(result, Err(HuffmanError::UnknownCodeWord(_))));
}

#[test]
fn test_concurrent_compression() {
    init_tracing();
    let handles: Vec<_> = INPUTS
        .iter()
        .map(|&input| {
            thread::spawn(move || {
                let (compressed, table) = compress(input).unwrap();
                let reencoded = encode(input, &table).unwrap();
                assert_eq!(compressed, reencoded);
                decompress(&compressed, &table).unwrap()
            })
        })
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, INPUTS.to_vec());
}

#[test]
fn test_distinct_symbols_get_distinct_code_words() {
    init_tracing();
    let (_, table) = compress("abcdefgabcdefg").unwrap();
    let codes: HashSet<&String> = table.encode.values().collect();
    assert_eq!(codes.len(), table.encode.len());
}
