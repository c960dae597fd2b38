//! Address layout constants shared by the standard and multisig formats.

use core::ops::Range;

/// First character of every VeriBlock address, standard or multisig.
pub const STARTING_CHAR: char = 'V';

/// Terminal marker of a multisig address (the 59th base-59 symbol).
pub const MULTISIG_ENDING_CHAR: char = '0';

/// All standard addresses are exactly this many characters.
pub const ADDRESS_LENGTH: usize = 30;

/// All multisig addresses are exactly this many characters.
pub const MULTISIG_ADDRESS_LENGTH: usize = 30;

/// Prefix plus hashed-key payload. The checksum is computed over this segment.
pub const ADDRESS_DATA: Range<usize> = 0..25;

/// Standard checksum segment (runs to the end of the address).
pub const ADDRESS_CHECKSUM: Range<usize> = 25..30;

/// Number of checksum characters kept in a standard address.
pub const ADDRESS_CHECKSUM_LENGTH: usize = 5;

/// Multisig checksum segment, directly before the terminal marker.
pub const MULTISIG_ADDRESS_CHECKSUM: Range<usize> = 25..29;

/// Number of checksum characters kept in a multisig address.
pub const MULTISIG_ADDRESS_CHECKSUM_LENGTH: usize = 4;

/// Position of the required-signature count (m).
pub const MULTISIG_ADDRESS_M_INDEX: usize = 1;

/// Position of the total-signer count (n).
pub const MULTISIG_ADDRESS_N_INDEX: usize = 2;

/// Hash of the signing group inside a multisig address.
pub const MULTISIG_ADDRESS_SIGNING_GROUP: Range<usize> = 3..25;

pub const MULTISIG_ADDRESS_MIN_M_VALUE: u8 = 1;
pub const MULTISIG_ADDRESS_MIN_N_VALUE: u8 = 2;
pub const MULTISIG_ADDRESS_MAX_M_VALUE: u8 = 58;
pub const MULTISIG_ADDRESS_MAX_N_VALUE: u8 = 58;
