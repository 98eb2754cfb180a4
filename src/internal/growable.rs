use std::slice;

use num_traits::Zero;
use tracing::trace;

use crate::space_usage::SpaceUsage;

/// Capacity is reserved at `GROWTH_NUMERATOR / GROWTH_DENOMINATOR` of the
/// requested length whenever the current allocation is too small.
pub const GROWTH_NUMERATOR: usize = 5;
/// See [`GROWTH_NUMERATOR`].
pub const GROWTH_DENOMINATOR: usize = 4;

/// GrowableBuffer provides the storage for `BitVec` and `ScalarVec`. It
/// doesn’t know what its slots mean, but it maintains the invariants:
///
///  1. Every slot below `len()` has been written or is zero.
///  2. The buffer never shrinks.
///
/// These two properties are what make it safe to use derived
/// implementations of Eq, Ord and Hash.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GrowableBuffer<T> {
    vec: Vec<T>,
}

impl<T: Copy + Zero> GrowableBuffer<T> {
    /// An empty buffer. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        GrowableBuffer { vec: Vec::new() }
    }

    /// A buffer of `len` zero slots.
    pub fn with_len(len: usize) -> Self {
        let mut result = Self::new();
        result.extend_to(len);
        result
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.vec.capacity()
    }

    /// Grows to `new_len` slots, zero-filling the new ones. Does nothing
    /// if the buffer is already at least that long.
    ///
    /// Reallocation reserves room beyond `new_len` so that a run of
    /// one-slot extensions costs amortized constant time.
    pub fn extend_to(&mut self, new_len: usize) {
        let old_len = self.vec.len();
        if new_len <= old_len {
            return;
        }

        if new_len > self.vec.capacity() {
            let goal = grown_capacity(new_len);
            let old_capacity = self.vec.capacity();
            self.vec.reserve_exact(goal - old_len);
            trace!(
                old_len,
                new_len,
                old_capacity,
                new_capacity = self.vec.capacity(),
                "GrowableBuffer: reallocated"
            );
        }

        self.vec.resize(new_len, T::zero());
    }

    /// Reads slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.vec[index]
    }

    /// Writes slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        self.vec[index] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.vec.iter()
    }
}

impl<T: Copy + Zero> Default for GrowableBuffer<T> {
    fn default() -> Self {
        GrowableBuffer::new()
    }
}

impl<T: SpaceUsage> SpaceUsage for GrowableBuffer<T> {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        self.vec.heap_bytes()
    }
}

// The capacity reserved when `requested` slots no longer fit.
fn grown_capacity(requested: usize) -> usize {
    let extra = requested / GROWTH_DENOMINATOR * (GROWTH_NUMERATOR - GROWTH_DENOMINATOR);
    requested.saturating_add(extra)
}
