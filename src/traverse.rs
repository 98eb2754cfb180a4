//! Functional traversal shared by every vector kind.

use crate::errors::{invalid_argument, Result};

/// In-order traversal of a vector’s elements.
///
/// Minimal complete definition is `item_count` and `item`. Each
/// traversal reads the element count once, before the first call to the
/// closure, and visits indices `0 .. count` in ascending order.
pub trait Traverse {
    /// The element type handed to closures.
    type Item: Copy;

    /// The number of elements visited by a traversal.
    fn item_count(&self) -> u64;

    /// The element at `index`, for `index < item_count()`.
    fn item(&self, index: u64) -> Self::Item;

    /// Calls `f(value, index)` for every element; returns `self`.
    fn for_each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(Self::Item, u64),
    {
        let count = self.item_count();
        for index in 0..count {
            f(self.item(index), index);
        }
        self
    }

    /// Collects `f(value)` for every element into a new `Vec`.
    fn map<R, F>(&self, mut f: F) -> Vec<R>
    where
        F: FnMut(Self::Item) -> R,
    {
        let count = self.item_count();
        let mut result = Vec::with_capacity(count as usize);
        for index in 0..count {
            result.push(f(self.item(index)));
        }
        result
    }

    /// Folds `f(accumulator, value)` over every element, starting from
    /// `initial`.
    fn reduce<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let count = self.item_count();
        let mut accumulator = initial;
        for index in 0..count {
            accumulator = f(accumulator, self.item(index));
        }
        accumulator
    }

    /// Like [`reduce`](#method.reduce), for callers whose seed is optional.
    ///
    /// Fails with `InvalidArgument` when `initial` is `None`, before any
    /// element is visited.
    fn try_reduce<A, F>(&self, initial: Option<A>, f: F) -> Result<A>
    where
        F: FnMut(A, Self::Item) -> A,
    {
        match initial {
            Some(initial) => Ok(self.reduce(initial, f)),
            None => invalid_argument("Traverse::try_reduce", "no initial value supplied"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Squares(u64);

    impl Traverse for Squares {
        type Item = u64;

        fn item_count(&self) -> u64 {
            self.0
        }

        fn item(&self, index: u64) -> u64 {
            index * index
        }
    }

    #[test]
    fn for_each_in_order() {
        let mut seen = Vec::new();
        Squares(4).for_each(|value, index| seen.push((index, value)));
        assert_eq!(vec![(0, 0), (1, 1), (2, 4), (3, 9)], seen);
    }

    #[test]
    fn map() {
        assert_eq!(vec![1, 2, 5], Squares(3).map(|v| v + 1));
        assert!(Squares(0).map(|v| v).is_empty());
    }

    #[test]
    fn reduce() {
        assert_eq!(14, Squares(4).reduce(0, |acc, v| acc + v));
        assert_eq!("0149", Squares(4).reduce(String::new(), |acc, v| acc + &v.to_string()));
    }

    #[test]
    fn try_reduce() {
        assert_eq!(Ok(15), Squares(4).try_reduce(Some(1), |acc, v| acc + v));

        let mut calls = 0;
        let err = Squares(4)
            .try_reduce(None, |acc: u64, v| {
                calls += 1;
                acc + v
            })
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(0, calls);
    }
}
