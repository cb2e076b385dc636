//! Lazy, order-preserving filtering by predicate
//!
//! [`filter`] wraps any iterable in an adapter that yields the items a
//! predicate accepts. Nothing is evaluated up front: the predicate runs on an
//! item only when the consumer pulls far enough to reach it, so taking the
//! first few matches never scans the rest of the collection.
//!
//! Items may be owned or borrowed; anything that [`Borrow`]s the predicate's
//! item type works.
//!
//! # Example
//!
//! ```rust
//! use solidspec::filter::filter;
//!
//! let words = ["apple", "tree", "avocado", "house"];
//! let starts_with_a = |w: &&str| w.starts_with('a');
//!
//! let matches: Vec<_> = filter(&words, &starts_with_a).collect();
//! assert_eq!(matches, vec![&"apple", &"avocado"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::predicate::{Predicate, TryPredicate};

#[inline]
fn trace_decision(matched: bool) -> bool {
    #[cfg(feature = "tracing")]
    tracing::trace!(matched, "evaluated item");
    matched
}

/// Iterator yielding the items accepted by a predicate.
///
/// Created by [`filter`] or [`PredicateIteratorExt::satisfying`].
pub struct Filtered<'p, I, P: ?Sized, T: ?Sized> {
    items: I,
    predicate: &'p P,
    _item: PhantomData<fn(&T)>,
}

impl<'p, I, P, T> Iterator for Filtered<'p, I, P, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    P: Predicate<T> + ?Sized,
    T: ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.items
            .find(|item| trace_decision(predicate.evaluate(item.borrow())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

impl<'p, I, P, T> DoubleEndedIterator for Filtered<'p, I, P, T>
where
    I: DoubleEndedIterator,
    I::Item: Borrow<T>,
    P: Predicate<T> + ?Sized,
    T: ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let predicate = self.predicate;
        self.items
            .rfind(|item| trace_decision(predicate.evaluate(item.borrow())))
    }
}

impl<'p, I, P, T> FusedIterator for Filtered<'p, I, P, T>
where
    I: FusedIterator,
    I::Item: Borrow<T>,
    P: Predicate<T> + ?Sized,
    T: ?Sized,
{
}

impl<'p, I: Clone, P: ?Sized, T: ?Sized> Clone for Filtered<'p, I, P, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            predicate: self.predicate,
            _item: PhantomData,
        }
    }
}

impl<'p, I: fmt::Debug, P: ?Sized, T: ?Sized> fmt::Debug for Filtered<'p, I, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Yield, in order, each item of `items` that satisfies `predicate`.
///
/// `items` is only read, never modified. Every call returns a fresh
/// iterator, so the same collection and predicate can be filtered again.
///
/// # Example
///
/// ```rust
/// use solidspec::filter::filter;
/// use solidspec::predicate::*;
///
/// let numbers = vec![3, 8, 12, 5, 20];
/// let big_even = (|n: &i32| *n > 5).and(|n: &i32| n % 2 == 0);
///
/// let first = filter(&numbers, &big_even).next();
/// assert_eq!(first, Some(&8));
///
/// let owned: Vec<i32> = filter(numbers.clone(), &big_even).collect();
/// assert_eq!(owned, vec![8, 12, 20]);
/// ```
pub fn filter<'p, T, I, P>(items: I, predicate: &'p P) -> Filtered<'p, I::IntoIter, P, T>
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    P: Predicate<T> + ?Sized,
{
    Filtered {
        items: items.into_iter(),
        predicate,
        _item: PhantomData,
    }
}

/// Iterator over the results of a fallible predicate.
///
/// Accepted items are yielded as `Ok`, rejected items are skipped, and an
/// evaluation error is yielded as `Err` exactly as the predicate produced it.
/// Collecting into `Result<Vec<_>, _>` therefore stops at the first error.
///
/// Created by [`try_filter`] or [`PredicateIteratorExt::try_satisfying`].
pub struct TryFiltered<'p, I, P: ?Sized, T: ?Sized> {
    items: I,
    predicate: &'p P,
    _item: PhantomData<fn(&T)>,
}

impl<'p, I, P, T> Iterator for TryFiltered<'p, I, P, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    P: TryPredicate<T> + ?Sized,
    T: ?Sized,
{
    type Item = Result<I::Item, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.items.next()?;
            match self.predicate.try_evaluate(item.borrow()) {
                Ok(matched) if trace_decision(matched) => return Some(Ok(item)),
                Ok(_) => continue,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("predicate failed to evaluate item");
                    return Some(Err(err));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

impl<'p, I: fmt::Debug, P: ?Sized, T: ?Sized> fmt::Debug for TryFiltered<'p, I, P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFiltered")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Like [`filter`], for predicates whose evaluation can fail.
///
/// # Example
///
/// ```rust
/// use solidspec::filter::try_filter;
///
/// let inputs = ["10", "3", "oops", "42"];
/// let over_five = |s: &&str| s.parse::<i32>().map(|n| n > 5);
///
/// let result: Result<Vec<_>, _> = try_filter(&inputs, &over_five).collect();
/// assert!(result.is_err());
///
/// let first: Vec<_> = try_filter(&inputs, &over_five).take(1).collect();
/// assert_eq!(first, vec![Ok(&"10")]);
/// ```
pub fn try_filter<'p, T, I, P>(items: I, predicate: &'p P) -> TryFiltered<'p, I::IntoIter, P, T>
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    P: TryPredicate<T> + ?Sized,
{
    TryFiltered {
        items: items.into_iter(),
        predicate,
        _item: PhantomData,
    }
}

/// Method-call form of [`filter`] and [`try_filter`] for any iterator.
///
/// # Example
///
/// ```rust
/// use solidspec::filter::PredicateIteratorExt;
///
/// let odd = |n: &u32| n % 2 == 1;
/// let odds: Vec<u32> = (1..=9).satisfying(&odd).collect();
/// assert_eq!(odds, vec![1, 3, 5, 7, 9]);
/// ```
pub trait PredicateIteratorExt: Iterator + Sized {
    /// Keep only the items `predicate` accepts.
    fn satisfying<'p, T, P>(self, predicate: &'p P) -> Filtered<'p, Self, P, T>
    where
        T: ?Sized,
        Self::Item: Borrow<T>,
        P: Predicate<T> + ?Sized,
    {
        filter(self, predicate)
    }

    /// Keep only the items a fallible `predicate` accepts, surfacing errors.
    fn try_satisfying<'p, T, P>(self, predicate: &'p P) -> TryFiltered<'p, Self, P, T>
    where
        T: ?Sized,
        Self::Item: Borrow<T>,
        P: TryPredicate<T> + ?Sized,
    {
        try_filter(self, predicate)
    }
}

impl<I: Iterator> PredicateIteratorExt for I {}
