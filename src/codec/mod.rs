//! String encodings for every vector kind.
//!
//! Bit vectors encode as a radix prefix followed by one symbol per group of
//! bits, lowest bit indices first:
//!
//! ```text
//! ["BitVec["] prefix symbol* ["]"]      prefix ∈ { "0b", "0", "0x", "/" }
//! ```
//!
//! Scalar vectors encode as comma-separated decimals:
//!
//! ```text
//! ["IntVec[" | "FloatVec["] value ("," value)* ["]"]
//! ```

mod radix;
pub use self::radix::*;

mod bits;
pub use self::bits::*;

mod list;
pub use self::list::*;

pub mod tagged;
