//! Non-empty vector used to store the children of composite predicates
//!
//! A composite with no children has no sensible meaning (`all` of nothing is
//! vacuously true, `any` of nothing vacuously false), so composites keep their
//! children in a `NonEmptyVec<T>` and the arity ≥ 1 rule is carried by the type.
//!
//! # Examples
//!
//! ```
//! use solidspec::NonEmptyVec;
//!
//! let mut nev = NonEmptyVec::new(1, vec![2, 3]);
//! nev.push(4);
//! assert_eq!(nev.len(), 4);
//! assert_eq!(nev.iter().sum::<i32>(), 10);
//! ```

/// A vector guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a head element and tail.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Try to create a non-empty vector from a `Vec`.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use solidspec::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// Number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present for `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Append every element of `other`, keeping order.
    ///
    /// # Example
    ///
    /// ```
    /// use solidspec::NonEmptyVec;
    ///
    /// let mut a = NonEmptyVec::new(1, vec![2]);
    /// a.append(NonEmptyVec::new(3, vec![4]));
    /// assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, other: NonEmptyVec<T>) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Iterate over all elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}
