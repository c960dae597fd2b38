//! VeriBlock address encoding and validation.
//!
//! This crate provides pure Rust implementations of:
//! - Base-58 and base-59 codecs with leading-zero preservation
//! - SHA-256 based address checksums
//! - Standard (single-signature) and multisig address validation
//! - Automatic address type detection from raw protocol bytes
//! - Atomic unit conversion for VBK amounts

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod alphabet;
pub mod amount;
pub mod checksum;
pub mod codec;
pub mod constants;

pub use address::{
    address_to_bytes, check_multisig_address, check_standard_address, is_valid_multisig_address,
    is_valid_standard_address, parse_address_automatically, parse_address_hex, to_hex_string,
    Address, AddressError, AddressType, MultisigParams, Rejection,
};
pub use alphabet::{Alphabet, BASE58, BASE59};
pub use amount::{atomic_to_vbk, format_vbk, parse_vbk, AmountError};
#[cfg(feature = "std")]
pub use amount::vbk_to_atomic;
pub use checksum::compute_checksum;
pub use codec::{decode_multisig, decode_standard, encode_multisig, encode_standard, CodecError};
