//! VeriBlock address validation and automatic type detection.
//!
//! Supports:
//! - Standard addresses: 30 base-58 characters, `V` prefix, 5-character checksum
//! - Multisig addresses: 30 characters, m-of-n signer counts, 4-character
//!   checksum and a terminal `0` from the base-59 alphabet
//!
//! The `is_valid_*` predicates classify untrusted input and never fail.
//! Everything that expects a well-formed address returns [`AddressError`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use log::{debug, trace};
use thiserror::Error;

use crate::alphabet::{Alphabet, BASE58};
use crate::checksum::{chop_checksum, compute_checksum};
use crate::codec::{decode_multisig, decode_standard, encode_multisig, encode_standard, CodecError};
use crate::constants::*;

/// Why a candidate string is not a valid address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("address is empty")]
    Empty,

    #[error("address must be {expected} characters long, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("address must start with '{expected}', got '{actual}'")]
    InvalidPrefix { expected: char, actual: char },

    #[error("multisig address must end with '{expected}', got '{actual}'")]
    MissingTerminator { expected: char, actual: char },

    #[error("character '{character}' at position {position} is not base-58")]
    InvalidCharacter { character: char, position: usize },

    #[error("invalid signer counts: m = {m}, n = {n}")]
    InvalidSignerCounts { m: u8, n: u8 },

    #[error("checksum mismatch: computed {computed}, address has {found}")]
    ChecksumMismatch { computed: String, found: String },
}

/// Errors from operations that expect a well-formed address.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressError {
    /// A required input was missing.
    #[error("{0} is required")]
    InvalidArgument(&'static str),

    /// Bytes that encode to neither a standard nor a multisig address.
    #[error("bytes {0} do not encode a standard or multisig address")]
    InvalidAddressData(String),

    /// A string that is not a valid address.
    #[error("invalid address: {0}")]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Built with `map_err`: `FromHexError` is only an `Error` with std.
    #[error("invalid hex: {0}")]
    InvalidHex(hex::FromHexError),
}

/// VeriBlock address type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AddressType {
    /// Single-signature address over the base-58 alphabet.
    Standard,
    /// m-of-n address over the base-59 alphabet.
    Multisig,
}

impl AddressType {
    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::Standard => "standard",
            AddressType::Multisig => "multisig",
        }
    }
}

/// Signer counts embedded in a multisig address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultisigParams {
    /// Signatures required to spend (m).
    pub required: u8,
    /// Total signers in the group (n).
    pub total: u8,
}

/// Check a candidate standard address, reporting the first failed rule.
pub fn check_standard_address(candidate: &str) -> Result<(), Rejection> {
    check_length(candidate, ADDRESS_LENGTH)?;
    check_prefix(candidate)?;
    check_alphabet(&BASE58, candidate)?;

    // All base-58 from here on, so byte offsets are character offsets.
    let checksum = compute_checksum(&candidate[ADDRESS_DATA]);
    check_checksum(
        chop_checksum(&checksum, ADDRESS_CHECKSUM_LENGTH),
        &candidate[ADDRESS_CHECKSUM],
    )
}

/// Check a candidate multisig address, returning its signer counts.
pub fn check_multisig_address(candidate: &str) -> Result<MultisigParams, Rejection> {
    check_length(candidate, MULTISIG_ADDRESS_LENGTH)?;

    let last = candidate.chars().last().unwrap_or_default();
    if last != MULTISIG_ENDING_CHAR {
        return Err(Rejection::MissingTerminator {
            expected: MULTISIG_ENDING_CHAR,
            actual: last,
        });
    }

    // Stored as digit + 1, so '1' in either slot means a count of one.
    let m = signer_count(candidate, MULTISIG_ADDRESS_M_INDEX)?;
    let n = signer_count(candidate, MULTISIG_ADDRESS_N_INDEX)?;

    if n < MULTISIG_ADDRESS_MIN_N_VALUE
        || m < MULTISIG_ADDRESS_MIN_M_VALUE
        || m > n
        || n > MULTISIG_ADDRESS_MAX_N_VALUE
        || m > MULTISIG_ADDRESS_MAX_M_VALUE
    {
        return Err(Rejection::InvalidSignerCounts { m, n });
    }

    // The terminal marker is base-59 only; the rest must be base-58.
    let (body, _) = candidate.split_at(candidate.len() - MULTISIG_ENDING_CHAR.len_utf8());
    check_alphabet(&BASE58, body)?;

    let checksum = compute_checksum(&candidate[ADDRESS_DATA]);
    check_checksum(
        chop_checksum(&checksum, MULTISIG_ADDRESS_CHECKSUM_LENGTH),
        &candidate[MULTISIG_ADDRESS_CHECKSUM],
    )?;

    Ok(MultisigParams { required: m, total: n })
}

/// Whether `candidate` is a valid standard address.
///
/// Any malformed input (empty, wrong length, wrong prefix, non-base-58
/// characters, bad checksum) yields `false`.
pub fn is_valid_standard_address(candidate: &str) -> bool {
    match check_standard_address(candidate) {
        Ok(()) => true,
        Err(reason) => {
            trace!("not a standard address {:?}: {}", candidate, reason);
            false
        }
    }
}

/// Whether `candidate` is a valid multisig address.
///
/// Any malformed input, including out-of-range signer counts, yields `false`.
pub fn is_valid_multisig_address(candidate: &str) -> bool {
    match check_multisig_address(candidate) {
        Ok(_) => true,
        Err(reason) => {
            trace!("not a multisig address {:?}: {}", candidate, reason);
            false
        }
    }
}

/// Turn raw address bytes from a protocol message into an address string.
///
/// Tries the standard encoding first, then the multisig encoding. Bytes
/// that produce neither, including an empty buffer, are an error: callers
/// use this where an address is known to exist.
pub fn parse_address_automatically(bytes: &[u8]) -> Result<String, AddressError> {
    Address::from_bytes(bytes).map(|address| address.display)
}

/// Like [`parse_address_automatically`], for a hex-encoded payload.
pub fn parse_address_hex(payload: &str) -> Result<String, AddressError> {
    let bytes = hex::decode(payload.trim()).map_err(AddressError::InvalidHex)?;
    parse_address_automatically(&bytes)
}

/// Decode a valid address back to the raw bytes it was encoded from.
pub fn address_to_bytes(address: &str) -> Result<Vec<u8>, AddressError> {
    Address::parse(address)?.to_bytes()
}

/// Upper-case hex rendering used for hashes and keys in protocol output.
pub fn to_hex_string(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// A validated VeriBlock address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    display: String,
    multisig: Option<MultisigParams>,
}

impl Address {
    /// Parse and validate an address of either type.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(address: &str) -> Result<Self, AddressError> {
        let trimmed = address.trim();

        if trimmed.ends_with(MULTISIG_ENDING_CHAR) {
            let params = check_multisig_address(trimmed)?;
            return Ok(Address {
                display: trimmed.to_string(),
                multisig: Some(params),
            });
        }

        check_standard_address(trimmed)?;
        Ok(Address {
            display: trimmed.to_string(),
            multisig: None,
        })
    }

    /// Build an address from raw protocol bytes, standard encoding first.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        let standard = encode_standard(bytes);
        match check_standard_address(&standard) {
            Ok(()) => {
                debug!("parsed standard address {}", standard);
                return Ok(Address {
                    display: standard,
                    multisig: None,
                });
            }
            Err(reason) => trace!("not a standard address {:?}: {}", standard, reason),
        }

        let multisig = encode_multisig(bytes);
        match check_multisig_address(&multisig) {
            Ok(params) => {
                debug!("parsed multisig address {}", multisig);
                return Ok(Address {
                    display: multisig,
                    multisig: Some(params),
                });
            }
            Err(reason) => trace!("not a multisig address {:?}: {}", multisig, reason),
        }

        let data = hex::encode(bytes);
        debug!("bytes {} are not an address", data);
        Err(AddressError::InvalidAddressData(data))
    }

    /// The raw bytes this address encodes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, AddressError> {
        let bytes = match self.address_type() {
            AddressType::Standard => decode_standard(&self.display)?,
            AddressType::Multisig => decode_multisig(&self.display)?,
        };
        Ok(bytes)
    }

    pub fn address_type(&self) -> AddressType {
        if self.multisig.is_some() {
            AddressType::Multisig
        } else {
            AddressType::Standard
        }
    }

    pub fn is_multisig(&self) -> bool {
        self.multisig.is_some()
    }

    /// Signer counts, for multisig addresses.
    pub fn multisig_params(&self) -> Option<MultisigParams> {
        self.multisig
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Prefix plus payload; the part the checksum is computed over.
    pub fn data(&self) -> &str {
        &self.display[ADDRESS_DATA]
    }

    pub fn checksum(&self) -> &str {
        match self.address_type() {
            AddressType::Standard => &self.display[ADDRESS_CHECKSUM],
            AddressType::Multisig => &self.display[MULTISIG_ADDRESS_CHECKSUM],
        }
    }

    /// Encoded hash of the signing group, for multisig addresses.
    pub fn signing_group(&self) -> Option<&str> {
        self.multisig
            .map(|_| &self.display[MULTISIG_ADDRESS_SIGNING_GROUP])
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.display
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Address::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn check_length(candidate: &str, expected: usize) -> Result<(), Rejection> {
    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }
    let actual = candidate.chars().count();
    if actual != expected {
        return Err(Rejection::InvalidLength { expected, actual });
    }
    Ok(())
}

fn check_prefix(candidate: &str) -> Result<(), Rejection> {
    let first = candidate.chars().next().unwrap_or_default();
    if first != STARTING_CHAR {
        return Err(Rejection::InvalidPrefix {
            expected: STARTING_CHAR,
            actual: first,
        });
    }
    Ok(())
}

fn check_alphabet(alphabet: &Alphabet, candidate: &str) -> Result<(), Rejection> {
    match candidate
        .chars()
        .enumerate()
        .find(|&(_, c)| !alphabet.contains(c))
    {
        Some((position, character)) => Err(Rejection::InvalidCharacter { character, position }),
        None => Ok(()),
    }
}

fn check_checksum(computed: &str, found: &str) -> Result<(), Rejection> {
    if computed != found {
        return Err(Rejection::ChecksumMismatch {
            computed: computed.to_string(),
            found: found.to_string(),
        });
    }
    Ok(())
}

/// Signer count stored at character `index`: its base-58 digit plus one.
fn signer_count(candidate: &str, index: usize) -> Result<u8, Rejection> {
    let character = candidate.chars().nth(index).unwrap_or_default();
    BASE58
        .digit(character)
        .map(|digit| digit + 1)
        .ok_or(Rejection::InvalidCharacter { character, position: index })
}
