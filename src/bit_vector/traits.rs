use num_traits::Zero;

use crate::storage::{Address, BlockType};

/// Read-only bit vector operations.
///
/// Minimal complete definition is `bit_len` and `get_block`. Every
/// multi-bit read goes through `read_bits`, which is the one place that
/// knows how to assemble a group of bits spanning two blocks.
pub trait Bits {
    /// The underlying block type used to store the bits of the vector.
    type Block: BlockType;

    /// The length of the vector in bits.
    fn bit_len(&self) -> u64;

    /// Gets the block at `position`.
    ///
    /// The bits are laid out `Block::nbits()` per block, with the notional
    /// zeroth bit in the least significant position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    fn get_block(&self, position: usize) -> Self::Block;

    /// The length of the vector in blocks.
    fn block_len(&self) -> usize {
        Self::Block::ceil_div_nbits(self.bit_len())
    }

    /// Gets the block at `position`, or zero past the end of the vector.
    #[inline]
    fn get_block_or_zero(&self, position: usize) -> Self::Block {
        if position < self.block_len() {
            self.get_block(position)
        } else {
            Self::Block::zero()
        }
    }

    /// Gets the bit at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    fn get_bit(&self, position: u64) -> bool {
        assert!(position < self.bit_len(), "Bits::get_bit: out of bounds");

        let address = Address::new::<Self::Block>(position);
        self.get_block(address.block_index)
            .get_bit(address.bit_offset)
    }

    /// Gets `count` bits starting at bit index `start`, interpreted as a
    /// little-endian integer.
    ///
    /// The group may straddle two blocks, in which case the low part comes
    /// from the first block and the high part from the next. Bits at or
    /// past `bit_len()` read as zero.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the block size.
    fn read_bits(&self, start: u64, count: usize) -> Self::Block {
        assert!(
            count <= Self::Block::nbits(),
            "Bits::read_bits: count too large"
        );

        if count == 0 {
            return Self::Block::zero();
        }

        let address = Address::new::<Self::Block>(start);
        let margin = Self::Block::nbits() - address.bit_offset;
        let block1 = self.get_block_or_zero(address.block_index);

        if margin >= count {
            return block1.get_bits(address.bit_offset, count);
        }

        let extra = count - margin;
        let block2 = self.get_block_or_zero(address.block_index + 1);

        let low_bits = block1.get_bits(address.bit_offset, margin);
        let high_bits = block2.get_bits(0, extra);

        (high_bits << margin) | low_bits
    }
}

/// Mutable bit vector operations that don’t affect the length.
///
/// Minimal complete definition is `set_block`.
pub trait BitsMut: Bits {
    /// Sets the block at `position` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    fn set_block(&mut self, position: usize, value: Self::Block);

    /// Sets the bit at `position` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    fn set_bit(&mut self, position: u64, value: bool) {
        assert!(position < self.bit_len(), "BitsMut::set_bit: out of bounds");

        let address = Address::new::<Self::Block>(position);
        let old_block = self.get_block(address.block_index);
        let new_block = old_block.with_bit(address.bit_offset, value);
        self.set_block(address.block_index, new_block);
    }

    /// Sets `count` bits starting at bit index `start` to the low bits of
    /// `value`, interpreted as a little-endian integer.
    ///
    /// This is the write half of [`Bits::read_bits`]: a group straddling two
    /// blocks has its low part stored in the first block and its high part
    /// in the next.
    ///
    /// # Panics
    ///
    /// Panics if the bit span goes out of bounds or `count` exceeds the
    /// block size.
    fn write_bits(&mut self, start: u64, count: usize, value: Self::Block) {
        assert!(
            count <= Self::Block::nbits(),
            "BitsMut::write_bits: count too large"
        );
        assert!(
            start + count as u64 <= self.bit_len(),
            "BitsMut::write_bits: out of bounds"
        );

        if count == 0 {
            return;
        }

        let address = Address::new::<Self::Block>(start);
        let margin = Self::Block::nbits() - address.bit_offset;

        if margin >= count {
            let old_block = self.get_block(address.block_index);
            let new_block = old_block.with_bits(address.bit_offset, count, value);
            self.set_block(address.block_index, new_block);
            return;
        }

        let extra = count - margin;

        let old_block1 = self.get_block(address.block_index);
        let old_block2 = self.get_block(address.block_index + 1);

        let high_bits = value >> margin;

        let new_block1 = old_block1.with_bits(address.bit_offset, margin, value);
        let new_block2 = old_block2.with_bits(0, extra, high_bits);

        self.set_block(address.block_index, new_block1);
        self.set_block(address.block_index + 1, new_block2);
    }
}

impl<Block: BlockType> Bits for [Block] {
    type Block = Block;

    #[inline]
    fn bit_len(&self) -> u64 {
        Block::mul_nbits(self.len())
    }

    #[inline]
    fn block_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get_block(&self, position: usize) -> Block {
        self[position]
    }
}

impl<Block: BlockType> BitsMut for [Block] {
    #[inline]
    fn set_block(&mut self, position: usize, value: Block) {
        self[position] = value;
    }
}
