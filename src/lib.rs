//! Growable bit, integer and float vectors.
//!
//! This library provides three vectors that grow on demand and never
//! shrink:
//!
//!   - [bit vectors](bit_vector/struct.BitVec.html), packed into 32-bit
//!     (or any [`BlockType`](storage/trait.BlockType.html)) words;
//!   - [integer vectors](scalar_vector/type.IntVec.html) of `i32`; and
//!   - [float vectors](scalar_vector/type.FloatVec.html) of `f32`.
//!
//! Writing past the end of a vector grows it, and every slot it has not
//! been given reads as zero (or `false`). All three support in-order
//! [traversal](traverse/trait.Traverse.html) and a [string
//! encoding](codec/index.html): bit vectors in base 2, 8, 16 or 64, and
//! the others as comma-separated decimals.
//!
//! # Example
//!
//! ```rust
//! use growvec::{BitVec, IntVec, Radix, Traverse};
//!
//! let mut bits: BitVec = BitVec::new();
//! bits.set(1, true);
//! bits.set(3, true);
//! bits.set(4, true);
//! assert_eq!(32, bits.len());
//! assert!(bits.to_string_radix(Radix::Hex).starts_with("0xa1"));
//!
//! let copy: BitVec = bits.to_tagged_radix(Radix::Hex).parse().unwrap();
//! assert_eq!(bits, copy);
//!
//! let ints: IntVec = "1,2,3,4".parse().unwrap();
//! assert_eq!(10, ints.reduce(0, |acc, x| acc + x));
//! ```
//!
//! # Features
//!
//!   - `serde`: `Serialize` and `Deserialize` for every vector, by way of
//!     the tagged string form.

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod errors;
pub use errors::{Error, Result};

mod internal;

mod space_usage;
pub use space_usage::SpaceUsage;

pub mod storage;
pub use storage::BlockType;

pub mod bit_vector;
pub use bit_vector::{BitVec, Bits, BitsMut};

pub mod codec;
pub use codec::Radix;

pub mod scalar_vector;
pub use scalar_vector::{FloatVec, IntVec, Scalar, ScalarVec};

pub mod traverse;
pub use traverse::Traverse;

#[cfg(feature = "serde")]
mod ser;
