//! Conversion between atomic units and VBK.
//!
//! Amounts travel over the wire as signed atomic units; 1 VBK is
//! 100,000,000 of them.

use alloc::format;
use alloc::string::{String, ToString};
use thiserror::Error;

/// Atomic units in one VBK.
pub const ATOMIC_UNITS_PER_VBK: i64 = 100_000_000;

/// Fractional digits of a VBK amount.
pub const DECIMALS: usize = 8;

/// Amount parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount: {0:?}")]
    InvalidFormat(String),

    #[error("amount has more than 8 decimal places")]
    TooPrecise,

    #[error("amount out of range")]
    OutOfRange,
}

/// Atomic units as a floating-point VBK value, for display.
pub fn atomic_to_vbk(atomic: i64) -> f64 {
    atomic as f64 / ATOMIC_UNITS_PER_VBK as f64
}

/// Exact decimal rendering with all eight fractional digits.
pub fn format_vbk(atomic: i64) -> String {
    let sign = if atomic < 0 { "-" } else { "" };
    let magnitude = atomic.unsigned_abs();
    let unit = ATOMIC_UNITS_PER_VBK as u64;
    format!("{}{}.{:08}", sign, magnitude / unit, magnitude % unit)
}

/// Parse a decimal VBK amount such as `"12.5"` into atomic units.
pub fn parse_vbk(input: &str) -> Result<i64, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(AmountError::InvalidFormat(input.to_string()));
    }
    if fraction.len() > DECIMALS {
        return Err(AmountError::TooPrecise);
    }

    // Only digits remain, so parsing can fail on overflow alone.
    let whole_units: i64 = match whole {
        "" => 0,
        digits => digits.parse().map_err(|_| AmountError::OutOfRange)?,
    };
    let fraction_units: i64 = match fraction {
        "" => 0,
        digits => {
            let value: i64 = digits.parse().map_err(|_| AmountError::OutOfRange)?;
            value * 10i64.pow((DECIMALS - digits.len()) as u32)
        }
    };

    // Signed before accumulating, so i64::MIN is reachable.
    let sign = if negative { -1 } else { 1 };
    whole_units
        .checked_mul(sign * ATOMIC_UNITS_PER_VBK)
        .and_then(|units| units.checked_add(sign * fraction_units))
        .ok_or(AmountError::OutOfRange)
}

/// Floating-point VBK to atomic units, rounding half to even.
#[cfg(feature = "std")]
pub fn vbk_to_atomic(vbk: f64) -> Result<i64, AmountError> {
    let scaled = (vbk * ATOMIC_UNITS_PER_VBK as f64).round_ties_even();
    if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
        return Err(AmountError::OutOfRange);
    }
    Ok(scaled as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_to_vbk() {
        assert_eq!(atomic_to_vbk(0), 0.0);
        assert_eq!(atomic_to_vbk(150_000_000), 1.5);
        assert_eq!(atomic_to_vbk(-50_000_000), -0.5);
    }

    #[test]
    fn test_format_vbk() {
        assert_eq!(format_vbk(0), "0.00000000");
        assert_eq!(format_vbk(1), "0.00000001");
        assert_eq!(format_vbk(1_234_500_000), "12.34500000");
        assert_eq!(format_vbk(-150_000_000), "-1.50000000");
        assert_eq!(format_vbk(i64::MIN), "-92233720368.54775808");
    }

    #[test]
    fn test_parse_vbk() {
        assert_eq!(parse_vbk("1"), Ok(100_000_000));
        assert_eq!(parse_vbk("12.345"), Ok(1_234_500_000));
        assert_eq!(parse_vbk(" 0.00000001 "), Ok(1));
        assert_eq!(parse_vbk(".5"), Ok(50_000_000));
        assert_eq!(parse_vbk("2."), Ok(200_000_000));
        assert_eq!(parse_vbk("-1.5"), Ok(-150_000_000));
        assert_eq!(parse_vbk("+3"), Ok(300_000_000));
    }

    #[test]
    fn test_parse_vbk_errors() {
        assert_eq!(parse_vbk(""), Err(AmountError::Empty));
        assert_eq!(parse_vbk("."), Err(AmountError::InvalidFormat(".".to_string())));
        assert_eq!(parse_vbk("1e5"), Err(AmountError::InvalidFormat("1e5".to_string())));
        assert_eq!(parse_vbk("-+1"), Err(AmountError::InvalidFormat("-+1".to_string())));
        assert_eq!(parse_vbk("0.000000001"), Err(AmountError::TooPrecise));
        assert_eq!(parse_vbk("92233720369"), Err(AmountError::OutOfRange));
        assert_eq!(parse_vbk("99999999999999999999"), Err(AmountError::OutOfRange));
        assert_eq!(parse_vbk("92233720368.54775808"), Err(AmountError::OutOfRange));
        assert_eq!(parse_vbk("-92233720368.54775809"), Err(AmountError::OutOfRange));
    }

    #[test]
    fn test_format_parse_agree() {
        for atomic in [0, 1, 99_999_999, 100_000_000, 4_200_000_017, -7, i64::MAX, i64::MIN] {
            assert_eq!(parse_vbk(&format_vbk(atomic)), Ok(atomic));
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_vbk_to_atomic() {
        assert_eq!(vbk_to_atomic(1.5), Ok(150_000_000));
        assert_eq!(vbk_to_atomic(12.34), Ok(1_234_000_000));
        assert_eq!(vbk_to_atomic(-0.00000001), Ok(-1));
        assert_eq!(vbk_to_atomic(f64::NAN), Err(AmountError::OutOfRange));
        assert_eq!(vbk_to_atomic(f64::INFINITY), Err(AmountError::OutOfRange));
        assert_eq!(vbk_to_atomic(1e12), Err(AmountError::OutOfRange));
    }
}
