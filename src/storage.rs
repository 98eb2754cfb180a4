//! Storage words and bit addressing.

use std::fmt;
use std::mem;

use num_traits::{NumCast, PrimInt, ToPrimitive, Unsigned};

use crate::space_usage::SpaceUsage;

/// Types that can be used as the storage word of a `BitVec`.
///
/// This trait has two groups of methods:
///
///   - methods for computing sizes and offsets relative to the block size,
///   - methods for getting and setting individual and groups of bits
///     within a single block.
///
/// Anything spanning more than one block lives in
/// [`Bits`](../bit_vector/trait.Bits.html).
pub trait BlockType: PrimInt + Unsigned + SpaceUsage + fmt::Debug {
    // Methods for computing sizes and offsets relative to the block size.

    /// The number of bits in a block.
    #[inline]
    fn nbits() -> usize {
        8 * mem::size_of::<Self>()
    }

    /// Returns `index / Self::nbits()`.
    ///
    /// This converts a bit address into a block address, which is why
    /// it takes `u64` and returns `usize`. There is no check that the
    /// result actually fits in a `usize`.
    #[inline]
    fn div_nbits(index: u64) -> usize {
        (index >> Self::lg_nbits()) as usize
    }

    /// Returns `index / Self::nbits()`, or `None` if the block address
    /// doesn’t fit in a `usize`.
    #[inline]
    fn checked_div_nbits(index: u64) -> Option<usize> {
        (index >> Self::lg_nbits()).to_usize()
    }

    /// Returns `index / Self::nbits()` rounded up.
    ///
    /// This converts a bit size into a block size.
    #[inline]
    fn ceil_div_nbits(index: u64) -> usize {
        Self::div_nbits(index + (Self::nbits() as u64 - 1))
    }

    /// Returns `index / Self::nbits()` rounded up, or `None` on
    /// overflow.
    #[inline]
    fn checked_ceil_div_nbits(index: u64) -> Option<usize> {
        index
            .checked_add(Self::nbits() as u64 - 1)
            .and_then(Self::checked_div_nbits)
    }

    /// Returns `index % Self::nbits()`, computed by masking.
    #[inline]
    fn mod_nbits(index: u64) -> usize {
        (index & (Self::nbits() as u64 - 1)) as usize
    }

    /// Returns `index * Self::nbits()`, computed by shifting.
    ///
    /// This converts a block address into a bit address.
    #[inline]
    fn mul_nbits(index: usize) -> u64 {
        (index as u64) << Self::lg_nbits()
    }

    /// Log-base-2 of the number of bits in a block.
    #[inline]
    fn lg_nbits() -> usize {
        Self::nbits().trailing_zeros() as usize
    }

    /// The bit mask consisting of `Self::nbits() - element_bits` zeroes
    /// followed by `element_bits` ones.
    ///
    /// # Precondition
    ///
    /// `element_bits <= Self::nbits()`
    #[inline]
    fn low_mask(element_bits: usize) -> Self {
        debug_assert!(element_bits <= Self::nbits());

        if element_bits == Self::nbits() {
            !Self::zero()
        } else {
            (Self::one() << element_bits) - Self::one()
        }
    }

    /// The bit mask with the `bit_index`th bit set.
    ///
    /// Bits are indexed in little-endian style based at 0.
    #[inline]
    fn nth_mask(bit_index: usize) -> Self {
        Self::one() << bit_index
    }

    // Methods for getting and setting bits.

    /// Extracts the value of the `bit_index`th bit.
    ///
    /// # Panics
    ///
    /// Panics if `bit_index` is out of bounds.
    #[inline]
    fn get_bit(self, bit_index: usize) -> bool {
        assert!(bit_index < Self::nbits(), "Block::get_bit: out of bounds");
        self & Self::nth_mask(bit_index) != Self::zero()
    }

    /// Functionally updates the value of the `bit_index`th bit to `bit_value`.
    ///
    /// # Panics
    ///
    /// Panics if `bit_index` is out of bounds.
    #[inline]
    fn with_bit(self, bit_index: usize, bit_value: bool) -> Self {
        assert!(bit_index < Self::nbits(), "Block::with_bit: out of bounds");
        if bit_value {
            self | Self::nth_mask(bit_index)
        } else {
            self & !Self::nth_mask(bit_index)
        }
    }

    /// Extracts `len` bits starting at bit offset `start`.
    ///
    /// # Panics
    ///
    /// Panics if the bit span is out of bounds.
    #[inline]
    fn get_bits(self, start: usize, len: usize) -> Self {
        assert!(start + len <= Self::nbits(), "Block::get_bits: out of bounds");

        if len == 0 {
            return Self::zero();
        }

        (self >> start) & Self::low_mask(len)
    }

    /// Functionally updates `len` bits to `value` starting at offset `start`.
    ///
    /// # Panics
    ///
    /// Panics if the bit span is out of bounds.
    #[inline]
    fn with_bits(self, start: usize, len: usize, value: Self) -> Self {
        assert!(start + len <= Self::nbits(), "Block::with_bits: out of bounds");

        if len == 0 {
            return self;
        }

        let mask = Self::low_mask(len) << start;
        let shifted_value = value << start;

        (self & !mask) | (shifted_value & mask)
    }

    /// Widens a symbol-sized value (at most 8 bits) into a block.
    #[inline]
    fn from_symbol(value: u8) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::zero)
    }

    /// Narrows the low 8 bits of a block into a symbol value.
    #[inline]
    fn low_byte(self) -> u8 {
        (self & Self::low_mask(8usize.min(Self::nbits())))
            .to_u8()
            .unwrap_or(0)
    }
}

impl BlockType for u8 {}
impl BlockType for u16 {}
impl BlockType for u32 {}
impl BlockType for u64 {}

/// Represents the address of a bit, broken into a block component
/// and a bit offset component.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Address {
    /// The index of the block containing the bit in question.
    pub block_index: usize,
    /// The position of the bit in question within its block.
    pub bit_offset: usize,
}

impl Address {
    /// Creates an `Address` for the given bit index for storage in
    /// block type `Block`.
    #[inline]
    pub fn new<Block: BlockType>(bit_index: u64) -> Self {
        Address {
            block_index: Block::div_nbits(bit_index),
            bit_offset: Block::mod_nbits(bit_index),
        }
    }

    /// Converts an `Address` back into a raw bit index.
    ///
    /// This method and `new` should be inverses.
    #[inline]
    pub fn bit_index<Block: BlockType>(&self) -> u64 {
        Block::mul_nbits(self.block_index) + self.bit_offset as u64
    }
}
