//! JavaScript entry points for encoding, validation and parsing.
//!
//! JS may pass `null` or `undefined` where a string or byte array is
//! expected. Validators answer `false` for those; parsing reports an error.

use vbk_address as vbk;
use vbk_address::{Address, AddressError};
use wasm_bindgen::prelude::*;

use crate::info::AddressInfo;

fn to_js_error(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Automatic parsing where the byte buffer may be absent.
pub fn parse_optional_bytes(bytes: Option<&[u8]>) -> Result<String, AddressError> {
    let bytes = bytes.ok_or(AddressError::InvalidArgument("address bytes"))?;
    vbk::parse_address_automatically(bytes)
}

/// Encode bytes with the base-58 alphabet.
#[wasm_bindgen]
pub fn encode_standard(bytes: &[u8]) -> String {
    vbk::encode_standard(bytes)
}

/// Decode a base-58 string.
#[wasm_bindgen]
pub fn decode_standard(input: &str) -> Result<Vec<u8>, JsValue> {
    vbk::decode_standard(input).map_err(to_js_error)
}

/// Encode bytes with the base-59 alphabet.
#[wasm_bindgen]
pub fn encode_multisig(bytes: &[u8]) -> String {
    vbk::encode_multisig(bytes)
}

/// Decode a base-59 string.
#[wasm_bindgen]
pub fn decode_multisig(input: &str) -> Result<Vec<u8>, JsValue> {
    vbk::decode_multisig(input).map_err(to_js_error)
}

/// Whether the value is a valid standard address.
#[wasm_bindgen]
pub fn is_valid_standard_address(candidate: Option<String>) -> bool {
    candidate
        .as_deref()
        .is_some_and(vbk::is_valid_standard_address)
}

/// Whether the value is a valid multisig address.
#[wasm_bindgen]
pub fn is_valid_multisig_address(candidate: Option<String>) -> bool {
    candidate
        .as_deref()
        .is_some_and(vbk::is_valid_multisig_address)
}

/// Turn raw address bytes into a standard or multisig address string.
#[wasm_bindgen]
pub fn parse_address_automatically(bytes: Option<Vec<u8>>) -> Result<String, JsValue> {
    parse_optional_bytes(bytes.as_deref()).map_err(to_js_error)
}

/// Same as `parse_address_automatically`, for a hex-encoded payload.
#[wasm_bindgen]
pub fn parse_address_hex(payload: &str) -> Result<String, JsValue> {
    vbk::parse_address_hex(payload).map_err(to_js_error)
}

/// Raw bytes of a valid address.
#[wasm_bindgen]
pub fn address_to_bytes(address: &str) -> Result<Vec<u8>, JsValue> {
    vbk::address_to_bytes(address).map_err(to_js_error)
}

/// Validate an address and return its parts as an object.
#[wasm_bindgen]
pub fn describe_address(address: &str) -> Result<JsValue, JsValue> {
    let address = Address::parse(address)
        .map_err(|e| JsValue::from_str(&format!("Invalid address: {}", e)))?;
    AddressInfo::from_address(&address)
        .map_err(to_js_error)?
        .to_js()
}

/// Atomic units as a VBK number.
#[wasm_bindgen]
pub fn atomic_to_vbk(atomic: i64) -> f64 {
    vbk::atomic_to_vbk(atomic)
}

/// Atomic units as an exact decimal VBK string.
#[wasm_bindgen]
pub fn format_vbk(atomic: i64) -> String {
    vbk::format_vbk(atomic)
}

/// Parse a decimal VBK string into atomic units.
#[wasm_bindgen]
pub fn parse_vbk(amount: &str) -> Result<i64, JsValue> {
    vbk::parse_vbk(amount).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_bytes() {
        assert_eq!(
            parse_optional_bytes(None),
            Err(AddressError::InvalidArgument("address bytes"))
        );
        assert_eq!(
            parse_optional_bytes(Some(&[][..])),
            Err(AddressError::InvalidAddressData(String::new()))
        );

        let bytes = hex::decode("682329b9dfb790cc95492a081de043421c4e7287cb0a").unwrap();
        assert_eq!(
            parse_optional_bytes(Some(&bytes)).unwrap(),
            "VGKBNdQwed4PRnYCvnhDTaVJi2vmRs"
        );
    }

    #[test]
    fn test_validators_accept_missing_values() {
        assert!(!is_valid_standard_address(None));
        assert!(!is_valid_multisig_address(None));
        assert!(is_valid_standard_address(Some("VGKBNdQwed4PRnYCvnhDTaVJi2vmRs".to_string())));
        assert!(is_valid_multisig_address(Some("V2357pxG7ohXgqcVEdFrp5c1TGKfW0".to_string())));
        assert!(!is_valid_multisig_address(Some("VGKBNdQwed4PRnYCvnhDTaVJi2vmRs".to_string())));
    }

    #[test]
    fn test_codec_passthrough() {
        assert_eq!(encode_standard(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(encode_multisig(b"hello world"), "MPHwtLC38hXvCh1");
        assert_eq!(format_vbk(150_000_000), "1.50000000");
        assert_eq!(atomic_to_vbk(150_000_000), 1.5);
    }
}
