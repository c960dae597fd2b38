//! Base-N encoding over an [`Alphabet`].
//!
//! The byte sequence is treated as one big-endian number and converted by
//! repeated long division, so the same routine serves base 58 and base 59.
//! Leading zero bytes map one-to-one to leading encoded-zero symbols.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use thiserror::Error;

use crate::alphabet::{Alphabet, BASE58, BASE59};

/// Decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A character outside the alphabet; `position` is its character index.
    #[error("illegal character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Encode bytes with the standard (base-58) alphabet.
pub fn encode_standard(input: &[u8]) -> String {
    encode(&BASE58, input)
}

/// Decode a standard (base-58) string.
pub fn decode_standard(input: &str) -> Result<Vec<u8>, CodecError> {
    decode(&BASE58, input)
}

/// Encode bytes with the multisig (base-59) alphabet.
pub fn encode_multisig(input: &[u8]) -> String {
    encode(&BASE59, input)
}

/// Decode a multisig (base-59) string.
pub fn decode_multisig(input: &str) -> Result<Vec<u8>, CodecError> {
    decode(&BASE59, input)
}

/// Whether every character of `input` is a base-58 symbol.
pub fn is_standard_string(input: &str) -> bool {
    BASE58.contains_all(input)
}

/// Whether every character of `input` is a base-59 symbol.
pub fn is_multisig_string(input: &str) -> bool {
    BASE59.contains_all(input)
}

/// Encode bytes over `alphabet`.
pub fn encode(alphabet: &Alphabet, input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }

    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Divided in place, so work on a copy.
    let mut number = input.to_vec();

    // Upper bound: every byte yields fewer than two symbols.
    let mut encoded = vec![0u8; input.len() * 2];
    let mut output_start = encoded.len();

    let mut input_start = zeros;
    while input_start < number.len() {
        let remainder = div_mod(&mut number, input_start, 256, alphabet.base());
        output_start -= 1;
        encoded[output_start] = alphabet.symbol(remainder);
        if number[input_start] == 0 {
            input_start += 1;
        }
    }

    // Drop the zero digits produced by the division itself...
    let zero_symbol = alphabet.symbol(0);
    while output_start < encoded.len() && encoded[output_start] == zero_symbol {
        output_start += 1;
    }
    // ...then put back exactly one per leading zero byte.
    for _ in 0..zeros {
        output_start -= 1;
        encoded[output_start] = zero_symbol;
    }

    encoded[output_start..].iter().map(|&b| b as char).collect()
}

/// Decode a string over `alphabet` back to bytes.
pub fn decode(alphabet: &Alphabet, input: &str) -> Result<Vec<u8>, CodecError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut digits = Vec::with_capacity(input.len());
    for (position, character) in input.chars().enumerate() {
        let digit = alphabet
            .digit(character)
            .ok_or(CodecError::InvalidCharacter { character, position })?;
        digits.push(digit);
    }

    let zeros = digits.iter().take_while(|&&d| d == 0).count();

    // Base-N digits never need more bytes than there are digits.
    let mut decoded = vec![0u8; digits.len()];
    let mut output_start = decoded.len();

    let mut input_start = zeros;
    while input_start < digits.len() {
        output_start -= 1;
        decoded[output_start] = div_mod(&mut digits, input_start, alphabet.base(), 256);
        if digits[input_start] == 0 {
            input_start += 1;
        }
    }

    // Ignore zero bytes added by the division, keep the encoded ones.
    while output_start < decoded.len() && decoded[output_start] == 0 {
        output_start += 1;
    }

    Ok(decoded.split_off(output_start - zeros))
}

/// Divide the number held in `number[first_digit..]` (digits in `base`)
/// by `divisor`, in place, and return the remainder.
fn div_mod(number: &mut [u8], first_digit: usize, base: u32, divisor: u32) -> u8 {
    let mut remainder = 0u32;
    for digit in number[first_digit..].iter_mut() {
        let temp = remainder * base + *digit as u32;
        *digit = (temp / divisor) as u8;
        remainder = temp % divisor;
    }
    remainder as u8
}
