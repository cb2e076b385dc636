//! Predicates whose evaluation can fail
//!
//! A `TryPredicate` is used when reading an attribute may not succeed (a
//! missing key, a malformed record). Errors are never caught or rewrapped:
//! whatever the selector returns is what the caller sees.

use std::fmt;
use std::marker::PhantomData;

use super::combinators::Predicate;

/// A boolean test over `T` that may fail with `Self::Error`.
pub trait TryPredicate<T: ?Sized>: Send + Sync {
    /// Error produced when the item cannot be evaluated.
    type Error;

    /// Check whether `item` satisfies this predicate.
    fn try_evaluate(&self, item: &T) -> Result<bool, Self::Error>;
}

// Blanket impl for closures
impl<T: ?Sized, E, F> TryPredicate<T> for F
where
    F: Fn(&T) -> Result<bool, E> + Send + Sync,
{
    type Error = E;

    #[inline]
    fn try_evaluate(&self, item: &T) -> Result<bool, E> {
        self(item)
    }
}

/// Extension trait for fallible predicate combinators.
pub trait TryPredicateExt<T: ?Sized>: TryPredicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// The right side is only evaluated when the left side returns
    /// `Ok(true)`; the first error ends evaluation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solidspec::predicate::*;
    ///
    /// let parsed_positive = |s: &str| s.parse::<i32>().map(|n| n > 0);
    /// let parsed_even = |s: &str| s.parse::<i32>().map(|n| n % 2 == 0);
    /// let p = parsed_positive.and(parsed_even);
    ///
    /// assert_eq!(p.try_evaluate("4"), Ok(true));
    /// assert_eq!(p.try_evaluate("-4"), Ok(false));
    /// assert!(p.try_evaluate("four").is_err());
    /// ```
    fn and<P>(self, other: P) -> TryAnd<Self, P>
    where
        P: TryPredicate<T, Error = Self::Error>,
    {
        TryAnd(self, other)
    }
}

impl<T: ?Sized, P: TryPredicate<T>> TryPredicateExt<T> for P {}

/// AND combinator for fallible predicates.
#[derive(Clone, Copy, Debug)]
pub struct TryAnd<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1, P2> TryPredicate<T> for TryAnd<P1, P2>
where
    P1: TryPredicate<T>,
    P2: TryPredicate<T, Error = P1::Error>,
{
    type Error = P1::Error;

    #[inline]
    fn try_evaluate(&self, item: &T) -> Result<bool, Self::Error> {
        Ok(self.0.try_evaluate(item)? && self.1.try_evaluate(item)?)
    }
}

/// Adapts an infallible predicate to any error type.
///
/// Created by [`lift`].
pub struct Lift<P, E> {
    inner: P,
    _error: PhantomData<fn() -> E>,
}

impl<P: Clone, E> Clone for Lift<P, E> {
    fn clone(&self) -> Self {
        lift(self.inner.clone())
    }
}

impl<P: fmt::Debug, E> fmt::Debug for Lift<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lift").field(&self.inner).finish()
    }
}

impl<T: ?Sized, P: Predicate<T>, E> TryPredicate<T> for Lift<P, E> {
    type Error = E;

    #[inline]
    fn try_evaluate(&self, item: &T) -> Result<bool, E> {
        Ok(self.inner.evaluate(item))
    }
}

/// Use an infallible predicate where a [`TryPredicate`] is expected.
///
/// # Example
///
/// ```rust
/// use solidspec::predicate::*;
///
/// let digits = |s: &str| s.parse::<u32>().map(|n| n > 9);
/// let short = lift(|s: &str| s.len() < 4);
/// let p = digits.and(short);
/// assert_eq!(p.try_evaluate("123"), Ok(true));
/// assert_eq!(p.try_evaluate("12345"), Ok(false));
/// ```
pub fn lift<P, E>(predicate: P) -> Lift<P, E> {
    Lift {
        inner: predicate,
        _error: PhantomData,
    }
}
