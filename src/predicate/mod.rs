//! Predicate composition engine
//!
//! A predicate is a pure boolean test over an item. Simple predicates compare
//! one attribute of an item against a target; composites combine other
//! predicates with AND/OR, and composition is closed, so trees of any depth
//! can be built from small, reusable pieces without touching existing code.
//!
//! # Example
//!
//! ```rust
//! use solidspec::predicate::*;
//!
//! #[derive(Clone, Copy, PartialEq)]
//! enum Color { Green, Blue }
//!
//! struct Thing { name: &'static str, color: Color, large: bool }
//!
//! let blue = attribute_eq(|t: &Thing| t.color, Color::Blue);
//! let large_blue = attribute_eq(|t: &Thing| t.large, true).and(blue);
//!
//! let house = Thing { name: "House", color: Color::Blue, large: true };
//! let apple = Thing { name: "Apple", color: Color::Green, large: false };
//! assert!(large_blue.evaluate(&house));
//! assert!(!large_blue.evaluate(&apple));
//! ```
//!
//! # Fallible attributes
//!
//! When reading an attribute can fail, use [`TryPredicate`] and
//! [`try_attribute_eq`]; the selector's error reaches the caller unchanged.

mod attribute;
mod combinators;
mod composite;
mod fallible;

// Re-export core traits
pub use combinators::{BoxedPredicate, Predicate, PredicateExt};
pub use fallible::{TryPredicate, TryPredicateExt};

// Re-export combinator types
pub use combinators::Not;
pub use composite::{AndPredicate, OrPredicate};
pub use fallible::{lift, Lift, TryAnd};

// Re-export attribute predicates
pub use attribute::{attribute_eq, try_attribute_eq, AttributeEquals, TryAttributeEquals};
