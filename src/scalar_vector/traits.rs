use std::fmt;
use std::str::FromStr;

use num_traits::Zero;

use crate::space_usage::SpaceUsage;

/// Element types that can be stored in a [`ScalarVec`](struct.ScalarVec.html).
///
/// Zero is the value of every slot that has not been written.
pub trait Scalar: Copy + PartialEq + Zero + fmt::Display + fmt::Debug + FromStr + SpaceUsage {
    /// The name used by the tagged string form, `TypeName[...]`.
    const TYPE_NAME: &'static str;
}

impl Scalar for i32 {
    const TYPE_NAME: &'static str = "IntVec";
}

impl Scalar for f32 {
    const TYPE_NAME: &'static str = "FloatVec";
}
