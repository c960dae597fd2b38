//! SHA-256 address checksums.

use alloc::string::String;
use sha2::{Digest, Sha256};

use crate::codec::encode_standard;

/// Single SHA-256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Hash the UTF-8 bytes of `payload` and return the digest in base-58.
///
/// The result is the full encoded digest; address formats keep only a
/// prefix of it (see [`chop_checksum`]).
pub fn compute_checksum(payload: &str) -> String {
    encode_standard(&sha256(payload.as_bytes()))
}

/// First `length` characters of a checksum, or all of it if shorter.
///
/// Checksums are base-58 text, so character and byte offsets coincide.
pub fn chop_checksum(checksum: &str, length: usize) -> &str {
    checksum.get(..length).unwrap_or(checksum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256() {
        let expected =
            hex::decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824").unwrap();
        assert_eq!(sha256(b"hello").as_slice(), expected.as_slice());
    }

    #[test]
    fn test_compute_checksum() {
        assert_eq!(
            compute_checksum("hello"),
            "42TEXg1vFAbcJ65y7qdYG9iCPvYfy3NDdVLd75akX2P5"
        );
        assert_eq!(
            compute_checksum("VGKBNdQwed4PRnYCvnhDTaVJi"),
            "2vmRsWEjma9kY5AcwVhQqVWXeVugFBhz268c6QQ6ySHJ"
        );
    }

    #[test]
    fn test_empty_payload() {
        // The digest of nothing is still a full 32-byte hash.
        assert_eq!(
            compute_checksum(""),
            "GKot5hBsd81kMupNCXHaqbhv3huEbxAFMLnpcX2hniwn"
        );
    }

    #[test]
    fn test_chop_checksum() {
        let checksum = compute_checksum("V2357pxG7ohXgqcVEdFrp5c1T");
        assert_eq!(chop_checksum(&checksum, 4), "GKfW");
        assert_eq!(chop_checksum(&checksum, 5), "GKfWP");
        assert_eq!(chop_checksum("abc", 5), "abc");
        assert_eq!(chop_checksum("abc", 0), "");
    }
}
