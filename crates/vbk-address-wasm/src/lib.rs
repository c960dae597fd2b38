//! WebAssembly bindings for VeriBlock address handling.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Base-58 and base-59 encoding of raw address bytes
//! - Standard and multisig address validation
//! - Turning protocol bytes into address strings
//! - VBK amount formatting

use wasm_bindgen::prelude::*;

pub mod api;
pub mod console;
pub mod info;

// Re-export main types for JS access
pub use info::AddressInfo;

/// Initialize the WASM module with better panic messages and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console::install(console::DEFAULT_LEVEL);
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
