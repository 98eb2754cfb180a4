use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::traits::*;
use crate::codec::{self, Radix};
use crate::errors::{invalid_argument, Error, Result};
use crate::internal::growable::GrowableBuffer;
use crate::space_usage::SpaceUsage;
use crate::storage::BlockType;
use crate::traverse::Traverse;

/// A growable vector of bits packed into `Block`-sized words.
///
/// The length is always a whole number of blocks: growing to cover bit
/// `n` rounds the length up to the end of the block containing it, and
/// the new bits are all `false`. The vector never shrinks.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BitVec<Block: BlockType = u32> {
    blocks: GrowableBuffer<Block>,
}

impl<Block: BlockType> BitVec<Block> {
    /// The name used by the tagged string form, `BitVec[...]`.
    pub const TYPE_NAME: &'static str = "BitVec";

    /// Creates a new, empty bit vector. Does not allocate.
    pub fn new() -> Self {
        BitVec {
            blocks: GrowableBuffer::new(),
        }
    }

    /// Creates a bit vector of at least `len` bits, all `false`.
    ///
    /// # Panics
    ///
    /// Panics if the number of blocks overflows a `usize`.
    pub fn with_len(len: u64) -> Self {
        let mut result = Self::new();
        result.extend(len);
        result
    }

    /// Like [`with_len`](#method.with_len), but takes a signed length
    /// and rejects negative ones.
    pub fn try_with_len(len: i64) -> Result<Self> {
        if len < 0 {
            return invalid_argument(
                "BitVec::try_with_len",
                format!("negative length {}", len),
            );
        }

        Ok(Self::with_len(len as u64))
    }

    /// Decodes a bit vector from any of the string forms produced by
    /// [`to_string_radix`](#method.to_string_radix) or
    /// [`to_tagged`](#method.to_tagged).
    ///
    /// Either the whole string decodes or an error is returned; a partial
    /// vector is never produced.
    pub fn decode(input: &str) -> Result<Self> {
        codec::decode_bits(input, Self::TYPE_NAME)
    }

    /// The number of addressable bits. Always a multiple of
    /// `Block::nbits()`.
    #[inline]
    pub fn len(&self) -> u64 {
        Block::mul_nbits(self.blocks.len())
    }

    /// True if no bits are addressable.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// How many bits the vector can hold without reallocating.
    pub fn capacity(&self) -> u64 {
        Block::mul_nbits(self.blocks.capacity())
    }

    /// Grows the vector so that bits `0 .. new_len` are addressable.
    ///
    /// Does nothing if they already are. Otherwise the length becomes
    /// `new_len` rounded up to a whole block, and all new bits are
    /// `false`.
    ///
    /// # Panics
    ///
    /// Panics if the number of blocks overflows a `usize`.
    pub fn extend(&mut self, new_len: u64) {
        if new_len <= self.len() {
            return;
        }

        let new_block_len =
            Block::checked_ceil_div_nbits(new_len).expect("BitVec::extend: overflow");

        trace!(
            old_len = self.len(),
            new_len = Block::mul_nbits(new_block_len),
            "BitVec: extend"
        );
        self.blocks.extend_to(new_block_len);
    }

    /// Gets the bit at `index`, or `false` if `index` is out of range.
    #[inline]
    pub fn get(&self, index: u64) -> bool {
        index < self.len() && self.get_bit(index)
    }

    /// Sets the bit at `index` to `value`, growing the vector if needed.
    ///
    /// Clearing a bit past the end does nothing, since those bits already
    /// read as `false`. Returns `value`.
    pub fn set(&mut self, index: u64, value: bool) -> bool {
        if value || index < self.len() {
            let new_len = index.checked_add(1).expect("BitVec::set: overflow");
            self.extend(new_len);
            self.set_bit(index, value);
        }

        value
    }

    /// Encodes the vector with the given radix, low bit indices first.
    ///
    /// ```
    /// use growvec::{BitVec, Radix};
    ///
    /// let mut bits: BitVec = BitVec::new();
    /// bits.set(1, true);
    /// bits.set(3, true);
    /// bits.set(4, true);
    /// assert_eq!("0xa1000000", bits.to_string_radix(Radix::Hex));
    /// ```
    pub fn to_string_radix(&self, radix: Radix) -> String {
        codec::encode_bits(self, radix, None)
    }

    /// Encodes the vector in the self-describing form `BitVec[/...]`,
    /// using base 64.
    pub fn to_tagged(&self) -> String {
        self.to_tagged_radix(Radix::Base64)
    }

    /// Encodes the vector in the self-describing form with the given
    /// radix.
    pub fn to_tagged_radix(&self, radix: Radix) -> String {
        codec::encode_bits(self, radix, Some(Self::TYPE_NAME))
    }

    /// Returns the backing blocks.
    pub fn as_blocks(&self) -> &[Block] {
        self.blocks.as_slice()
    }

    /// Returns an iterator over the bits of the vector.
    pub fn iter(&self) -> Iter<'_, Block> {
        Iter {
            vec: self,
            start: 0,
            limit: self.len(),
        }
    }

    /// The number of set bits.
    pub fn count_ones(&self) -> u64 {
        self.blocks
            .iter()
            .map(|block| block.count_ones() as u64)
            .sum()
    }
}

impl<Block: BlockType> Bits for BitVec<Block> {
    type Block = Block;

    #[inline]
    fn bit_len(&self) -> u64 {
        self.len()
    }

    #[inline]
    fn block_len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    fn get_block(&self, position: usize) -> Block {
        self.blocks.get(position)
    }
}

impl<Block: BlockType> BitsMut for BitVec<Block> {
    #[inline]
    fn set_block(&mut self, position: usize, value: Block) {
        self.blocks.set(position, value);
    }
}

impl<Block: BlockType> Traverse for BitVec<Block> {
    type Item = bool;

    #[inline]
    fn item_count(&self) -> u64 {
        self.len()
    }

    #[inline]
    fn item(&self, index: u64) -> bool {
        self.get(index)
    }
}

/// Formats as base 64, the form `"{}"` and `to_string()` produce.
impl<Block: BlockType> fmt::Display for BitVec<Block> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_string_radix(Radix::Base64))
    }
}

impl<Block: BlockType> fmt::Binary for BitVec<Block> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_string_radix(Radix::Binary))
    }
}

impl<Block: BlockType> fmt::Octal for BitVec<Block> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_string_radix(Radix::Octal))
    }
}

impl<Block: BlockType> fmt::LowerHex for BitVec<Block> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&self.to_string_radix(Radix::Hex))
    }
}

impl<Block: BlockType> FromStr for BitVec<Block> {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::decode(input)
    }
}

impl<'a, Block: BlockType> TryFrom<&'a str> for BitVec<Block> {
    type Error = Error;

    fn try_from(input: &'a str) -> Result<Self> {
        Self::decode(input)
    }
}

/// Same as [`BitVec::with_len`](struct.BitVec.html#method.with_len).
impl<Block: BlockType> From<u64> for BitVec<Block> {
    fn from(len: u64) -> Self {
        Self::with_len(len)
    }
}

impl<Block: BlockType> SpaceUsage for BitVec<Block> {
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        self.blocks.heap_bytes()
    }
}

impl<Block: BlockType> Default for BitVec<Block> {
    fn default() -> Self {
        BitVec::new()
    }
}

/// Iterator over `BitVec`.
#[derive(Clone, Debug)]
pub struct Iter<'a, Block: BlockType + 'a = u32> {
    vec: &'a BitVec<Block>,
    start: u64,
    limit: u64,
}

impl<'a, Block: BlockType> Iterator for Iter<'a, Block> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.start < self.limit {
            let result = self.vec.get_bit(self.start);
            self.start += 1;
            Some(result)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.limit - self.start) as usize;
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<bool> {
        self.start = self
            .start
            .checked_add(n as u64)
            .map_or(self.limit, |start| start.min(self.limit));
        self.next()
    }
}

impl<'a, Block: BlockType> ExactSizeIterator for Iter<'a, Block> {}

impl<'a, Block: BlockType> DoubleEndedIterator for Iter<'a, Block> {
    fn next_back(&mut self) -> Option<bool> {
        if self.start < self.limit {
            self.limit -= 1;
            Some(self.vec.get_bit(self.limit))
        } else {
            None
        }
    }
}

impl<'a, Block: BlockType + 'a> IntoIterator for &'a BitVec<Block> {
    type Item = bool;
    type IntoIter = Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
