//! Radix encoding of packed bits.

use tracing::debug;

use super::radix::Radix;
use super::tagged;
use crate::bit_vector::{BitVec, Bits, BitsMut};
use crate::errors::{bad_format, Result};
use crate::storage::BlockType;

/// Encodes `bits` one symbol per `radix.bits_per_symbol()` bits, starting
/// at bit 0.
///
/// A trailing group that runs past `bit_len()` is padded with zeros. With
/// `tag`, the result is wrapped as `tag[...]`.
pub fn encode_bits<B: Bits + ?Sized>(bits: &B, radix: Radix, tag: Option<&str>) -> String {
    let width = radix.bits_per_symbol();
    let len = bits.bit_len();

    let mut payload = String::with_capacity(radix.prefix().len() + (len as usize + width - 1) / width);
    payload.push_str(radix.prefix());

    let mut cursor = 0;
    while cursor < len {
        let value = bits.read_bits(cursor, width).low_byte();
        payload.push(radix.symbol(value));
        cursor += width as u64;
    }

    match tag {
        Some(tag) => tagged::wrap(tag, &payload),
        None => payload,
    }
}

/// Decodes a string produced by [`encode_bits`](fn.encode_bits.html).
///
/// An optional `tag[` prefix and `]` suffix are stripped, then the radix is
/// chosen from the payload prefix. Each symbol grows the vector by
/// `bits_per_symbol()` bits.
///
/// Fails on an unrecognized prefix, a character outside the alphabet, or a
/// symbol too large for the radix. Nothing is returned on failure, so a
/// caller never sees a partially decoded vector.
pub fn decode_bits<Block: BlockType>(input: &str, tag: &str) -> Result<BitVec<Block>> {
    const WHO: &str = "BitVec::decode";

    let (radix, payload) = Radix::detect(tagged::strip(input, tag)).or_else(|_| {
        debug!(input, "BitVec: unrecognized prefix");
        bad_format(WHO, format!("unrecognized format {:?}", input))
    })?;

    let width = radix.bits_per_symbol();
    let mut result = BitVec::new();

    for (position, symbol) in payload.chars().enumerate() {
        let value = match radix.value_of(symbol) {
            Some(value) => value,
            None => {
                debug!(radix = radix.base(), position, %symbol, "BitVec: bad symbol");
                return bad_format(
                    WHO,
                    format!(
                        "symbol {:?} at position {} is not a base-{} digit",
                        symbol, position, radix
                    ),
                );
            }
        };

        let cursor = position as u64 * width as u64;
        result.extend(cursor + width as u64);
        result.write_bits(cursor, width, Block::from_symbol(value));
    }

    Ok(result)
}
