//! Packed bit vectors.
//!
//! The [`Bits`](trait.Bits.html) and [`BitsMut`](trait.BitsMut.html) traits
//! describe anything laid out as little-endian blocks of bits, including
//! plain slices of blocks. [`BitVec`](struct.BitVec.html) is the growable
//! implementation.

mod traits;
pub use self::traits::*;

mod bit_vec;
pub use self::bit_vec::*;
