use std::fmt;

use crate::errors::{bad_format, invalid_argument, Result};

const ALPHABET_BYTES: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ/+";

/// The symbol alphabet shared by every radix. A symbol’s value is its
/// position in the table; radix *r* uses the first *r* symbols.
pub static ALPHABET: [u8; 64] = *ALPHABET_BYTES;

const NOT_A_SYMBOL: u8 = 0xFF;

// Maps a byte back to its position in `ALPHABET`.
static SYMBOL_VALUES: [u8; 256] = build_symbol_values();

const fn build_symbol_values() -> [u8; 256] {
    let mut table = [NOT_A_SYMBOL; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// A radix of the bit vector string codec.
///
/// | radix | bits per symbol | prefix |
/// |-------|-----------------|--------|
/// | 2     | 1               | `0b`   |
/// | 8     | 3               | `0`    |
/// | 16    | 4               | `0x`   |
/// | 64    | 6               | `/`    |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Radix {
    /// Base 2.
    Binary,
    /// Base 8.
    Octal,
    /// Base 16.
    Hex,
    /// Base 64.
    Base64,
}

impl Radix {
    /// Every radix, smallest first.
    pub const ALL: [Radix; 4] = [Radix::Binary, Radix::Octal, Radix::Hex, Radix::Base64];

    /// Looks up a radix by its numeric base.
    pub fn from_base(base: u32) -> Result<Radix> {
        match base {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            16 => Ok(Radix::Hex),
            64 => Ok(Radix::Base64),
            _ => invalid_argument(
                "Radix::from_base",
                format!("unsupported radix {} (expected 2, 8, 16 or 64)", base),
            ),
        }
    }

    /// The numeric base.
    pub fn base(self) -> u32 {
        1 << self.bits_per_symbol()
    }

    /// How many bits each symbol stands for.
    pub fn bits_per_symbol(self) -> usize {
        match self {
            Radix::Binary => 1,
            Radix::Octal => 3,
            Radix::Hex => 4,
            Radix::Base64 => 6,
        }
    }

    /// The string that introduces a payload in this radix.
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0",
            Radix::Hex => "0x",
            Radix::Base64 => "/",
        }
    }

    /// Mask of the bits a symbol may carry.
    pub fn mask(self) -> u8 {
        ((1u16 << self.bits_per_symbol()) - 1) as u8
    }

    /// Picks the radix from the start of an encoded payload and returns it
    /// with the rest of the string.
    ///
    /// `0x` and `0b` are checked before the bare `0` of base 8.
    pub fn detect(input: &str) -> Result<(Radix, &str)> {
        if let Some(rest) = input.strip_prefix('/') {
            Ok((Radix::Base64, rest))
        } else if let Some(rest) = input.strip_prefix("0x") {
            Ok((Radix::Hex, rest))
        } else if let Some(rest) = input.strip_prefix("0b") {
            Ok((Radix::Binary, rest))
        } else if let Some(rest) = input.strip_prefix('0') {
            Ok((Radix::Octal, rest))
        } else {
            match input.chars().next() {
                Some(c) => bad_format("Radix::detect", format!("unrecognized prefix {:?}", c)),
                None => bad_format("Radix::detect", "empty string"),
            }
        }
    }

    /// The symbol for `value`, which must fit in `bits_per_symbol()` bits.
    #[inline]
    pub fn symbol(self, value: u8) -> char {
        debug_assert!(value <= self.mask(), "Radix::symbol: value too large");
        ALPHABET[(value & self.mask()) as usize] as char
    }

    /// The value of `symbol` in this radix, or `None` if `symbol` is not in
    /// the alphabet or stands for a value too large for this radix.
    #[inline]
    pub fn value_of(self, symbol: char) -> Option<u8> {
        symbol_value(symbol).filter(|&value| value <= self.mask())
    }
}

/// The position of `symbol` in the alphabet, regardless of radix.
#[inline]
pub fn symbol_value(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }

    match SYMBOL_VALUES[symbol as usize] {
        NOT_A_SYMBOL => None,
        value => Some(value),
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.base())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alphabet_is_unique() {
        for (i, &symbol) in ALPHABET.iter().enumerate() {
            assert_eq!(Some(i as u8), symbol_value(symbol as char));
        }
    }

    #[test]
    fn table() {
        let rows: Vec<_> = Radix::ALL
            .iter()
            .map(|r| (r.base(), r.bits_per_symbol(), r.prefix(), r.mask()))
            .collect();

        assert_eq!(
            vec![
                (2, 1, "0b", 0x1),
                (8, 3, "0", 0x7),
                (16, 4, "0x", 0xF),
                (64, 6, "/", 0x3F),
            ],
            rows
        );
    }

    #[test]
    fn from_base() {
        for &radix in &Radix::ALL {
            assert_eq!(radix, Radix::from_base(radix.base()).unwrap());
        }
        assert!(Radix::from_base(10).unwrap_err().is_invalid_argument());
        assert!(Radix::from_base(32).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn detect() {
        assert_eq!((Radix::Base64, "abc"), Radix::detect("/abc").unwrap());
        assert_eq!((Radix::Hex, "a1"), Radix::detect("0xa1").unwrap());
        assert_eq!((Radix::Binary, "0101"), Radix::detect("0b0101").unwrap());
        assert_eq!((Radix::Octal, "17"), Radix::detect("017").unwrap());
        assert_eq!((Radix::Octal, ""), Radix::detect("0").unwrap());
        assert_eq!((Radix::Base64, ""), Radix::detect("/").unwrap());
        assert!(Radix::detect("q123").unwrap_err().is_format());
        assert!(Radix::detect("").unwrap_err().is_format());
        assert!(Radix::detect("x0").unwrap_err().is_format());
    }

    #[test]
    fn symbols() {
        assert_eq!('a', Radix::Hex.symbol(10));
        assert_eq!('+', Radix::Base64.symbol(63));
        assert_eq!('/', Radix::Base64.symbol(62));
        assert_eq!('Z', Radix::Base64.symbol(61));

        assert_eq!(Some(7), Radix::Octal.value_of('7'));
        assert_eq!(None, Radix::Octal.value_of('8'));
        assert_eq!(None, Radix::Binary.value_of('2'));
        assert_eq!(Some(15), Radix::Hex.value_of('f'));
        assert_eq!(None, Radix::Hex.value_of('g'));
        assert_eq!(None, Radix::Base64.value_of('-'));
        assert_eq!(None, Radix::Base64.value_of('é'));
    }

    #[test]
    fn display() {
        assert_eq!("64", Radix::Base64.to_string());
        assert_eq!("2", Radix::Binary.to_string());
    }
}
