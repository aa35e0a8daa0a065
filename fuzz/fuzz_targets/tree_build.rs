#![no_main]
use huffcode::{FrequencyTable, HuffmanTree, ALPHABET_SIZE, EOS_SYMBOL};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let freqs = FrequencyTable::count_bytes(data);
    let tree = HuffmanTree::from_frequencies(&freqs);

    // The sentinel must always end up with a code of at least one bit.
    let eos_len = tree.code_len(EOS_SYMBOL).unwrap();
    assert!(eos_len >= 1);

    // Every tallied byte must have a leaf; every absent one must not.
    for s in 0..256u16 {
        assert_eq!(tree.leaf(s).is_some(), freqs.get(s) > 0);
    }

    // Codes must be pairwise prefix-free.
    let codes: Vec<Vec<u8>> = tree.code_table().into_iter().flatten().collect();
    for (i, a) in codes.iter().enumerate() {
        for (j, b) in codes.iter().enumerate() {
            if i != j {
                assert!(!b.starts_with(a.as_slice()));
            }
        }
    }

    // code() and code_len() must agree symbol by symbol.
    for s in 0..ALPHABET_SIZE as u16 {
        let len = tree.code_len(s);
        let bits = tree.code(s).map(|c| c.len());
        assert_eq!(len, bits);
    }
});
