//! Core predicate trait and logical combinators
//!
//! This module provides the foundational `Predicate` trait, the extension
//! trait used to compose predicates, and the `Not` combinator.

use super::composite::{AndPredicate, OrPredicate};

/// A pure boolean test over items of type `T`.
///
/// Implementations must be free of side effects, which is what makes
/// predicates safe to share between threads and to evaluate in any order.
///
/// # Example
///
/// ```rust
/// use solidspec::predicate::*;
///
/// let even = |x: &i32| x % 2 == 0;
/// let small = |x: &i32| *x < 10;
/// let p = even.and(small);
/// assert!(p.evaluate(&4));
/// assert!(!p.evaluate(&12));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check whether `item` satisfies this predicate.
    fn evaluate(&self, item: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn evaluate(&self, item: &T) -> bool {
        self(item)
    }
}

/// A type-erased predicate, as stored by the composites.
pub type BoxedPredicate<T> = Box<dyn Predicate<T>>;

/// Extension trait for predicate combinators.
///
/// Composition is closed: every method returns another predicate, so trees
/// of any depth can be built by chaining.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a new [`AndPredicate`] whose children are `self` and `other`.
    /// Calling `and` on an `AndPredicate` appends to its children instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solidspec::predicate::*;
    ///
    /// let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 100);
    /// assert_eq!(p.len(), 2);
    /// assert!(p.evaluate(&50));
    /// assert!(!p.evaluate(&100));
    /// ```
    fn and<P>(self, other: P) -> AndPredicate<T>
    where
        Self: 'static,
        P: Predicate<T> + 'static,
    {
        AndPredicate::new(self.boxed(), vec![other.boxed()])
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solidspec::predicate::*;
    ///
    /// let p = (|x: &i32| *x < 0).or(|x: &i32| *x > 100);
    /// assert!(p.evaluate(&-5));
    /// assert!(p.evaluate(&150));
    /// assert!(!p.evaluate(&50));
    /// ```
    fn or<P>(self, other: P) -> OrPredicate<T>
    where
        Self: 'static,
        P: Predicate<T> + 'static,
    {
        OrPredicate::new(self.boxed(), vec![other.boxed()])
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type, e.g. to build a child list for a composite.
    fn boxed(self) -> BoxedPredicate<T>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn evaluate(&self, item: &T) -> bool {
        !self.0.evaluate(item)
    }
}

// Send + Sync are auto-derived when P is Send + Sync

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_as_predicate() {
        let is_even = |x: &i32| x % 2 == 0;
        assert!(is_even.evaluate(&4));
        assert!(!is_even.evaluate(&3));
    }

    #[test]
    fn test_and_nests_two_children() {
        let p = (|x: &i32| *x > 0).and(|x: &i32| *x < 10);
        assert_eq!(p.len(), 2);
        assert!(p.evaluate(&5));
        assert!(!p.evaluate(&0));
        assert!(!p.evaluate(&10));
    }

    #[test]
    fn test_or() {
        let p = (|x: &i32| *x < 0).or(|x: &i32| *x > 100);
        assert!(p.evaluate(&-1));
        assert!(p.evaluate(&101));
        assert!(!p.evaluate(&7));
    }

    #[test]
    fn test_not() {
        let p = (|x: &i32| *x > 0).not();
        assert!(p.evaluate(&-5));
        assert!(p.evaluate(&0));
        assert!(!p.evaluate(&5));
    }

    #[test]
    fn test_complex_chain() {
        // not((0 < x < 10) or x > 100)
        let p = (|x: &i32| *x > 0)
            .and(|x: &i32| *x < 10)
            .or(|x: &i32| *x > 100)
            .not();
        assert!(p.evaluate(&0));
        assert!(p.evaluate(&50));
        assert!(!p.evaluate(&5));
        assert!(!p.evaluate(&150));
    }

    #[test]
    fn test_boxed_keeps_behaviour() {
        let boxed: BoxedPredicate<str> = (|s: &str| s.starts_with('a')).boxed();
        assert!(boxed.evaluate("apple"));
        assert!(!boxed.evaluate("tree"));
    }

    #[test]
    fn test_predicates_are_shareable_across_threads() {
        fn assert_send_sync<P: Send + Sync>(_: &P) {}
        let p = (|x: &u8| *x > 1).and(|x: &u8| *x < 9);
        assert_send_sync(&p);
    }
}
