//! N-ary composite predicates
//!
//! `AndPredicate` and `OrPredicate` own an ordered, non-empty list of boxed
//! children. Children are evaluated in order and evaluation stops at the
//! first child that decides the result.

use std::fmt;

use super::combinators::{BoxedPredicate, Predicate, PredicateExt};
use crate::error::ConstructionError;
use crate::nonempty::NonEmptyVec;

fn children_from_vec<T: ?Sized>(
    children: Vec<BoxedPredicate<T>>,
    combinator: &'static str,
) -> Result<NonEmptyVec<BoxedPredicate<T>>, ConstructionError> {
    match NonEmptyVec::from_vec(children) {
        Some(children) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(combinator, children = children.len(), "built composite predicate");
            Ok(children)
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!(combinator, "rejected composite predicate with no children");
            Err(ConstructionError::EmptyComposite { combinator })
        }
    }
}

/// Satisfied iff every child is satisfied.
///
/// # Example
///
/// ```rust
/// use solidspec::predicate::*;
///
/// let positive_even = AndPredicate::try_new(vec![
///     (|x: &i32| *x > 0).boxed(),
///     (|x: &i32| x % 2 == 0).boxed(),
/// ])
/// .unwrap();
///
/// assert!(positive_even.evaluate(&4));
/// assert!(!positive_even.evaluate(&3));
/// assert!(!positive_even.evaluate(&-2));
/// ```
pub struct AndPredicate<T: ?Sized> {
    children: NonEmptyVec<BoxedPredicate<T>>,
}

impl<T: ?Sized> AndPredicate<T> {
    /// Build from a first child and any number of further children.
    pub fn new(first: BoxedPredicate<T>, rest: Vec<BoxedPredicate<T>>) -> Self {
        Self {
            children: NonEmptyVec::new(first, rest),
        }
    }

    /// Build from a list of children, failing if the list is empty.
    pub fn try_new(children: Vec<BoxedPredicate<T>>) -> Result<Self, ConstructionError> {
        children_from_vec(children, "and").map(|children| Self { children })
    }

    /// Append `other` as a further child, keeping the tree flat.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solidspec::predicate::*;
    ///
    /// let p = (|x: &i32| *x > 0)
    ///     .and(|x: &i32| *x < 100)
    ///     .and(|x: &i32| x % 5 == 0);
    /// assert_eq!(p.len(), 3);
    /// assert!(p.evaluate(&25));
    /// assert!(!p.evaluate(&26));
    /// ```
    pub fn and<P>(mut self, other: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        self.children.push(other.boxed());
        self
    }

    /// Conjoin with another `AndPredicate`, splicing its children in after
    /// this one's instead of nesting it as a single child.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solidspec::predicate::*;
    ///
    /// let bounded = (|x: &i32| *x > 0).and(|x: &i32| *x < 100);
    /// let odd_tens = (|x: &i32| x % 2 == 1).and(|x: &i32| x / 10 == 4);
    /// let p = bounded.and_all(odd_tens);
    /// assert_eq!(p.len(), 4);
    /// assert!(p.evaluate(&41));
    /// assert!(!p.evaluate(&42));
    /// ```
    pub fn and_all(mut self, other: AndPredicate<T>) -> Self {
        self.children.append(other.children);
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; a composite cannot be empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Predicate<T> for AndPredicate<T> {
    fn evaluate(&self, item: &T) -> bool {
        self.children.iter().all(|child| child.evaluate(item))
    }
}

impl<T: ?Sized> fmt::Debug for AndPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndPredicate")
            .field("children", &self.children.len())
            .finish()
    }
}

/// Satisfied iff at least one child is satisfied.
///
/// # Example
///
/// ```rust
/// use solidspec::predicate::*;
///
/// let extreme = OrPredicate::try_new(vec![
///     (|x: &i32| *x < -100).boxed(),
///     (|x: &i32| *x > 100).boxed(),
/// ])
/// .unwrap();
///
/// assert!(extreme.evaluate(&500));
/// assert!(!extreme.evaluate(&0));
/// ```
pub struct OrPredicate<T: ?Sized> {
    children: NonEmptyVec<BoxedPredicate<T>>,
}

impl<T: ?Sized> OrPredicate<T> {
    /// Build from a first child and any number of further children.
    pub fn new(first: BoxedPredicate<T>, rest: Vec<BoxedPredicate<T>>) -> Self {
        Self {
            children: NonEmptyVec::new(first, rest),
        }
    }

    /// Build from a list of children, failing if the list is empty.
    pub fn try_new(children: Vec<BoxedPredicate<T>>) -> Result<Self, ConstructionError> {
        children_from_vec(children, "or").map(|children| Self { children })
    }

    /// Append `other` as a further alternative, keeping the tree flat.
    pub fn or<P>(mut self, other: P) -> Self
    where
        P: Predicate<T> + 'static,
    {
        self.children.push(other.boxed());
        self
    }

    /// Disjoin with another `OrPredicate`, splicing its alternatives in
    /// after this one's.
    pub fn or_any(mut self, other: OrPredicate<T>) -> Self {
        self.children.append(other.children);
        self
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; a composite cannot be empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Predicate<T> for OrPredicate<T> {
    fn evaluate(&self, item: &T) -> bool {
        self.children.iter().any(|child| child.evaluate(item))
    }
}

impl<T: ?Sized> fmt::Debug for OrPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrPredicate")
            .field("children", &self.children.len())
            .finish()
    }
}
