//! Symbol tables for the base-58 and base-59 codecs.
//!
//! Both tables are built at compile time and never change. The base-59
//! alphabet is the base-58 alphabet with `0` appended, so every base-58
//! digit has the same value in both.

/// Marker for "not part of the alphabet" in the reverse lookup table.
const INVALID: u8 = 0xFF;

/// An ordered digit-to-symbol table with its reverse lookup.
///
/// Index 0 is the "encoded zero" symbol used for leading zero bytes.
#[derive(Debug)]
pub struct Alphabet {
    symbols: &'static str,
    indexes: [u8; 128],
}

/// The 58-symbol alphabet used by standard addresses and checksums.
pub static BASE58: Alphabet =
    Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

/// The 59-symbol alphabet used by multisig addresses.
pub static BASE59: Alphabet =
    Alphabet::new("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz0");

impl Alphabet {
    /// Build an alphabet and its reverse lookup table.
    ///
    /// Panics (at compile time for statics) if a symbol is not ASCII or
    /// appears twice, or if there are fewer than 2 or more than 255 symbols.
    pub const fn new(symbols: &'static str) -> Self {
        let bytes = symbols.as_bytes();
        assert!(bytes.len() >= 2 && bytes.len() < INVALID as usize);

        let mut indexes = [INVALID; 128];
        let mut i = 0;
        while i < bytes.len() {
            let symbol = bytes[i];
            assert!(symbol < 128, "alphabet symbols must be ASCII");
            assert!(indexes[symbol as usize] == INVALID, "alphabet symbols must be unique");
            indexes[symbol as usize] = i as u8;
            i += 1;
        }

        Alphabet { symbols, indexes }
    }

    /// Number of symbols, i.e. the numeric base.
    #[inline]
    pub fn base(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// The symbol standing for digit 0.
    #[inline]
    pub fn encoded_zero(&self) -> char {
        self.symbols.as_bytes()[0] as char
    }

    /// Symbol for a digit value. The digit must be below `base()`.
    #[inline]
    pub fn symbol(&self, digit: u8) -> u8 {
        self.symbols.as_bytes()[digit as usize]
    }

    /// Digit value of a character, or `None` if it is not in the alphabet.
    #[inline]
    pub fn digit(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.indexes[c as usize] {
            INVALID => None,
            digit => Some(digit),
        }
    }

    /// Whether a single character belongs to the alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.digit(c).is_some()
    }

    /// Whether every character of `s` belongs to the alphabet.
    ///
    /// The empty string trivially passes.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.contains(c))
    }

    /// The symbols in digit order.
    pub fn as_str(&self) -> &'static str {
        self.symbols
    }
}
