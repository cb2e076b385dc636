//! Error types surfaced by the engine and the journal lesson.
//!
//! Selector failures are deliberately absent: a fallible selector reports its
//! own error type, which reaches the caller untouched through
//! [`TryPredicate`](crate::predicate::TryPredicate) and
//! [`try_filter`](crate::filter::try_filter).

use std::io;

use thiserror::Error;

/// A composite predicate could not be built.
///
/// # Example
///
/// ```rust
/// use solidspec::predicate::{AndPredicate, BoxedPredicate};
/// use solidspec::ConstructionError;
///
/// let children: Vec<BoxedPredicate<i32>> = Vec::new();
/// let err = AndPredicate::try_new(children).unwrap_err();
/// assert_eq!(err, ConstructionError::EmptyComposite { combinator: "and" });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A composite was given zero children.
    #[error("`{combinator}` predicate requires at least one child")]
    EmptyComposite {
        /// Name of the combinator that was being built.
        combinator: &'static str,
    },
}

/// Failures of the journal and its persistence manager.
#[derive(Debug, Error)]
pub enum JournalError {
    /// `remove_entry` was called with a position past the end.
    #[error("entry {position} out of range (journal has {len} entries)")]
    EntryOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of entries at the time of the call.
        len: usize,
    },

    /// Reading or writing the journal file failed.
    #[error("journal I/O error: {0}")]
    Io(#[from] io::Error),
}
