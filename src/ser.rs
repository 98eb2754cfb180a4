//! Serialization support using serde.
//!
//! Every vector serializes as its tagged string, so the serialized form is
//! the same text that `to_tagged()` prints and `decode` accepts.

use crate::bit_vector::BitVec;
use crate::scalar_vector::{Scalar, ScalarVec};
use crate::storage::BlockType;

impl_tagged_serde!(
    [Block: BlockType] BitVec<Block>,
    "a tagged bit vector string such as \"BitVec[/1fz]\""
);

impl_tagged_serde!(
    [T: Scalar] ScalarVec<T>,
    "a tagged number list such as \"IntVec[1,2,3]\""
);
