//! Validation against a corpus of real mainnet addresses.

use vbk_address::{
    address_to_bytes, encode_multisig, encode_standard, is_valid_multisig_address,
    is_valid_standard_address, parse_address_automatically, Address, AddressType,
};

const REAL_ADDRESSES: [&str; 10] = [
    "V12PyBd7q9WqiarQuRqyWvJBX7gUK6",
    "V12VggtAS958tjAQf9EwiVafA43Sx4",
    "V1392ytdhodW1aeKRWUdwDzssDmc7g",
    "V13XCVZN3iEYnCKHL5SuZYbVsCUudn",
    "V1amJUd57PcLWB1aCvUJGGVxQHFHot",
    "V1FzU9WUSqiJj5stayEiNDhdeHPKdo",
    "VZsyTafkLhBgNMau56AgPwu3B3QUPM",
    "VZURJhdqkzCKc6gc2hG1ffSh23VpB9",
    "VZVfQ5Dve55MWALeLg8eGy6EN9QSX6",
    "V2357pxG7ohXgqcVEdFrp5c1TGKfW0",
];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Bump the code point of one character, as a transcription error would.
fn mutate(address: &str, index: usize) -> String {
    address
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i == index {
                char::from_u32(c as u32 + 1).unwrap()
            } else {
                c
            }
        })
        .collect()
}

#[test]
fn test_corpus_classification() {
    init_logging();

    for address in REAL_ADDRESSES {
        let standard = is_valid_standard_address(address);
        let multisig = is_valid_multisig_address(address);

        if address.ends_with('0') {
            assert!(!standard, "{} validated as standard", address);
            assert!(multisig, "{} did not validate as multisig", address);
        } else {
            assert!(standard, "{} did not validate as standard", address);
            assert!(!multisig, "{} validated as multisig", address);
        }
    }
}

#[test]
fn test_corpus_single_character_mutations() {
    init_logging();

    let mut combinations = 0;
    for address in REAL_ADDRESSES {
        for index in 0..address.chars().count() {
            let malformed = mutate(address, index);
            assert!(!is_valid_standard_address(&malformed), "{}", malformed);
            assert!(!is_valid_multisig_address(&malformed), "{}", malformed);
            combinations += 1;
        }
    }
    assert_eq!(combinations, REAL_ADDRESSES.len() * 30);
}

#[test]
fn test_corpus_bytes_roundtrip() {
    init_logging();

    for address in REAL_ADDRESSES {
        let bytes = address_to_bytes(address).unwrap();
        assert_eq!(parse_address_automatically(&bytes).unwrap(), address);

        let parsed = Address::from_bytes(&bytes).unwrap();
        assert_eq!(parsed.as_str(), address);
        match parsed.address_type() {
            AddressType::Standard => assert_eq!(encode_standard(&bytes), address),
            AddressType::Multisig => assert_eq!(encode_multisig(&bytes), address),
        }
    }
}

#[test]
fn test_truncated_and_extended() {
    init_logging();

    for address in REAL_ADDRESSES {
        let truncated = &address[..address.len() - 1];
        let extended = format!("{}--------", address);
        for candidate in [truncated, extended.as_str()] {
            assert!(!is_valid_standard_address(candidate));
            assert!(!is_valid_multisig_address(candidate));
        }
    }
}
