//! Address details handed to JavaScript.

use serde::{Deserialize, Serialize};
use vbk_address::{Address, AddressError, AddressType};
use wasm_bindgen::prelude::*;

/// Decomposition of a validated address for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    /// The address itself.
    pub address: Address,
    /// "standard" or "multisig".
    pub address_type: AddressType,
    /// Signatures required to spend (multisig only).
    pub required_signatures: Option<u8>,
    /// Signers in the group (multisig only).
    pub total_signers: Option<u8>,
    /// Prefix plus payload, the checksummed part.
    pub data: String,
    /// Checksum characters.
    pub checksum: String,
    /// Encoded signing-group hash (multisig only).
    pub signing_group: Option<String>,
    /// Raw address bytes as lower-case hex.
    pub payload_hex: String,
}

impl AddressInfo {
    /// Collect the details of an already validated address.
    pub fn from_address(address: &Address) -> Result<Self, AddressError> {
        let params = address.multisig_params();
        Ok(AddressInfo {
            address: address.clone(),
            address_type: address.address_type(),
            required_signatures: params.map(|p| p.required),
            total_signers: params.map(|p| p.total),
            data: address.data().to_string(),
            checksum: address.checksum().to_string(),
            signing_group: address.signing_group().map(str::to_string),
            payload_hex: hex::encode(address.to_bytes()?),
        })
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
