//! A trait for computing space usage.

use std::mem;

/// Computes the space usage of an object.
///
/// We calculate the space usage as split into two portions, the heap
/// portion (returned by `heap_bytes`) and the stack portion (returned by
/// `stack_bytes`). The stack portion is the statically-known size for
/// every object of its type as allocated on the stack; the heap portion
/// is the additional allocation that depends on run-time growth.
///
/// For the vectors in this crate the heap portion is the whole backing
/// allocation, including capacity reserved by geometric growth that is
/// not yet part of the logical length.
pub trait SpaceUsage: Sized {
    /// Computes the size of the receiver in bytes.
    ///
    /// The default implementation returns
    /// `Self::stack_bytes() + self.heap_bytes()`.
    #[inline]
    fn total_bytes(&self) -> usize {
        Self::stack_bytes() + self.heap_bytes()
    }

    /// Is the size of this type known statically?
    ///
    /// If this method returns true then `heap_bytes` should always
    /// return 0.
    fn is_stack_only() -> bool;

    /// Calculates the stack portion of the size of this type.
    ///
    /// The default implementation returns `std::mem::size_of::<Self>()`.
    #[inline]
    fn stack_bytes() -> usize {
        mem::size_of::<Self>()
    }

    /// Calculates the heap portion of the size of an object.
    fn heap_bytes(&self) -> usize;
}

impl_stack_only_space_usage!(bool);
impl_stack_only_space_usage!(u8);
impl_stack_only_space_usage!(u16);
impl_stack_only_space_usage!(u32);
impl_stack_only_space_usage!(u64);
impl_stack_only_space_usage!(usize);
impl_stack_only_space_usage!(i8);
impl_stack_only_space_usage!(i16);
impl_stack_only_space_usage!(i32);
impl_stack_only_space_usage!(i64);
impl_stack_only_space_usage!(isize);
impl_stack_only_space_usage!(f32);
impl_stack_only_space_usage!(f64);

impl<A: SpaceUsage> SpaceUsage for Vec<A> {
    #[inline]
    fn is_stack_only() -> bool {
        false
    }

    fn heap_bytes(&self) -> usize {
        let mut result = self.capacity() * A::stack_bytes();

        if !A::is_stack_only() {
            for each in self {
                result += each.heap_bytes();
            }
        }

        result
    }
}
