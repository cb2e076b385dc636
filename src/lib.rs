//! # solidspec
//!
//! Composable specifications and lazy filtering.
//!
//! The heart of the crate is a small predicate composition engine: a
//! [`Predicate`](predicate::Predicate) is a pure boolean test over an item,
//! [`AttributeEquals`](predicate::AttributeEquals) compares one attribute of an
//! item with a target, composites combine predicates with AND/OR, and
//! [`filter`](filter::filter) lazily yields the items a predicate accepts.
//! Adding a new way to filter means writing a new predicate, never editing an
//! existing one.
//!
//! Three worked lessons come with it:
//! - [`catalog`]: products filtered by color and size (open for extension),
//! - [`journal`]: a journal whose persistence lives elsewhere (single responsibility),
//! - [`shapes`]: rectangles and squares that substitute safely (Liskov substitution).
//!
//! ## Quick Example
//!
//! ```rust
//! use solidspec::catalog::{color_is, size_is, Color, Product, Size};
//! use solidspec::prelude::*;
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let green: Vec<_> = filter(&products, &color_is(Color::Green))
//!     .map(Product::name)
//!     .collect();
//! assert_eq!(green, vec!["Apple", "Tree"]);
//!
//! let large_blue = size_is(Size::Large).and(color_is(Color::Blue));
//! let names: Vec<_> = products.iter().satisfying(&large_blue).map(Product::name).collect();
//! assert_eq!(names, vec!["House"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events from filtering, composite construction
//!   and journal persistence.
//! - `serde`: `Serialize`/`Deserialize` for the catalog types and `Journal`.
//! - `proptest`: `Arbitrary` for the catalog types.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod journal;
pub mod nonempty;
pub mod predicate;
pub mod shapes;

// Re-exports
pub use error::{ConstructionError, JournalError};
pub use filter::{filter, try_filter, Filtered, PredicateIteratorExt, TryFiltered};
pub use nonempty::NonEmptyVec;
pub use predicate::{AndPredicate, AttributeEquals, OrPredicate, Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ConstructionError;
    pub use crate::filter::{filter, try_filter, PredicateIteratorExt};
    pub use crate::predicate::{
        attribute_eq, lift, try_attribute_eq, AndPredicate, AttributeEquals, BoxedPredicate, Not,
        OrPredicate, Predicate, PredicateExt, TryAttributeEquals, TryPredicate, TryPredicateExt,
    };
}
