use std::convert::TryFrom;
use std::fmt;
use std::iter::{Copied, FromIterator};
use std::slice;
use std::str::FromStr;

use super::traits::Scalar;
use crate::codec;
use crate::errors::{invalid_argument, Error, Result};
use crate::internal::growable::GrowableBuffer;
use crate::space_usage::SpaceUsage;
use crate::traverse::Traverse;

/// A growable vector of `T`, one element per slot.
///
/// Writing past the end grows the vector to exactly cover the written
/// index; the slots in between read as zero. The vector never shrinks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScalarVec<T> {
    elements: GrowableBuffer<T>,
}

/// A vector of 32-bit signed integers.
pub type IntVec = ScalarVec<i32>;

/// A vector of 32-bit floats.
pub type FloatVec = ScalarVec<f32>;

impl<T: Scalar> ScalarVec<T> {
    /// Creates a new, empty vector. Does not allocate.
    pub fn new() -> Self {
        ScalarVec {
            elements: GrowableBuffer::new(),
        }
    }

    /// Creates a vector of `len` zeros.
    pub fn with_len(len: usize) -> Self {
        ScalarVec {
            elements: GrowableBuffer::with_len(len),
        }
    }

    /// Like [`with_len`](#method.with_len), but takes a signed length
    /// and rejects negative ones.
    pub fn try_with_len(len: i64) -> Result<Self> {
        if len < 0 {
            return invalid_argument(
                "ScalarVec::try_with_len",
                format!("negative length {}", len),
            );
        }

        Ok(Self::with_len(len as usize))
    }

    /// Decodes a comma-separated list, optionally tagged as
    /// `TypeName[...]`.
    ///
    /// ```
    /// use growvec::IntVec;
    ///
    /// let v = IntVec::decode("IntVec[1,-2,3]").unwrap();
    /// assert_eq!(&[1, -2, 3], v.as_slice());
    /// ```
    pub fn decode(input: &str) -> Result<Self> {
        let values = codec::decode_list::<T>(input, T::TYPE_NAME, "ScalarVec::decode")?;
        Ok(values.into_iter().collect())
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// How many elements the vector can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Grows the vector to `new_len` elements, filling with zero. Does
    /// nothing if it is already that long.
    pub fn extend(&mut self, new_len: usize) {
        self.elements.extend_to(new_len);
    }

    /// Gets the element at `index`, or zero if `index` is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        if index < self.len() {
            self.elements.get(index)
        } else {
            T::zero()
        }
    }

    /// Sets the element at `index` to `value`, growing the vector if
    /// needed.
    ///
    /// Writing zero past the end does nothing, since those slots already
    /// read as zero. Returns `value`.
    pub fn set(&mut self, index: usize, value: T) -> T {
        if index < self.len() || !value.is_zero() {
            let new_len = index.checked_add(1).expect("ScalarVec::set: overflow");
            self.extend(new_len);
            self.elements.set(index, value);
        }

        value
    }

    /// Appends `value`, growing the vector by one.
    pub fn push(&mut self, value: T) {
        let index = self.len();
        self.extend(index + 1);
        self.elements.set(index, value);
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.elements.iter().copied()
    }

    /// Encodes the vector as `TypeName[v0,v1,...]`.
    pub fn to_tagged(&self) -> String {
        codec::encode_list(self.iter(), Some(T::TYPE_NAME))
    }
}

/// Iterator over the elements of a `ScalarVec`.
pub type Iter<'a, T> = Copied<slice::Iter<'a, T>>;

impl<T: Scalar> Traverse for ScalarVec<T> {
    type Item = T;

    #[inline]
    fn item_count(&self) -> u64 {
        self.len() as u64
    }

    #[inline]
    fn item(&self, index: u64) -> T {
        self.elements.get(index as usize)
    }
}

/// Formats as comma-separated values without the tag.
impl<T: Scalar> fmt::Display for ScalarVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(&codec::encode_list(self.iter(), None))
    }
}

impl<T: Scalar> FromStr for ScalarVec<T> {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::decode(input)
    }
}

impl<'a, T: Scalar> TryFrom<&'a str> for ScalarVec<T> {
    type Error = Error;

    fn try_from(input: &'a str) -> Result<Self> {
        Self::decode(input)
    }
}

/// Same as [`ScalarVec::with_len`](struct.ScalarVec.html#method.with_len).
impl<T: Scalar> From<usize> for ScalarVec<T> {
    fn from(len: usize) -> Self {
        Self::with_len(len)
    }
}

impl<T: Scalar> FromIterator<T> for ScalarVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();
        for value in iter {
            result.push(value);
        }
        result
    }
}

impl<'a, T: Scalar + 'a> IntoIterator for &'a ScalarVec<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar> SpaceUsage for ScalarVec<T> {
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        self.elements.heap_bytes()
    }
}

impl<T: Scalar> Default for ScalarVec<T> {
    fn default() -> Self {
        ScalarVec::new()
    }
}
