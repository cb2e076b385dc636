//! Attribute equality predicates
//!
//! An attribute predicate pairs a selector (a function reading one property of
//! an item) with a target value. The predicate never inspects the item itself,
//! so any item shape works as long as a selector can be written for it.

use std::fmt;

use super::combinators::Predicate;
use super::fallible::TryPredicate;

/// Satisfied when `selector(item) == target`.
///
/// # Example
///
/// ```rust
/// use solidspec::predicate::*;
///
/// struct Point { x: i32, y: i32 }
///
/// let on_y_axis = attribute_eq(|p: &Point| p.x, 0);
/// assert!(on_y_axis.evaluate(&Point { x: 0, y: 7 }));
/// assert!(!on_y_axis.evaluate(&Point { x: 1, y: 7 }));
/// ```
#[derive(Clone, Copy)]
pub struct AttributeEquals<F, V> {
    selector: F,
    target: V,
}

impl<F, V> AttributeEquals<F, V> {
    /// Create a predicate comparing `selector(item)` with `target`.
    pub fn new(selector: F, target: V) -> Self {
        Self { selector, target }
    }

    /// The value items are compared against.
    pub fn target(&self) -> &V {
        &self.target
    }
}

impl<T: ?Sized, F, V> Predicate<T> for AttributeEquals<F, V>
where
    F: Fn(&T) -> V + Send + Sync,
    V: PartialEq + Send + Sync,
{
    #[inline]
    fn evaluate(&self, item: &T) -> bool {
        (self.selector)(item) == self.target
    }
}

impl<F, V: fmt::Debug> fmt::Debug for AttributeEquals<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeEquals")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Create an [`AttributeEquals`] predicate.
pub fn attribute_eq<F, V>(selector: F, target: V) -> AttributeEquals<F, V> {
    AttributeEquals::new(selector, target)
}

/// Like [`AttributeEquals`], for selectors that can fail.
///
/// The selector's error is returned to the caller exactly as produced.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use solidspec::predicate::*;
///
/// type Record = HashMap<&'static str, &'static str>;
///
/// let is_green = try_attribute_eq(
///     |r: &Record| r.get("color").copied().ok_or("missing color"),
///     "green",
/// );
///
/// let leaf: Record = HashMap::from([("color", "green")]);
/// let blank: Record = HashMap::new();
/// assert_eq!(is_green.try_evaluate(&leaf), Ok(true));
/// assert_eq!(is_green.try_evaluate(&blank), Err("missing color"));
/// ```
#[derive(Clone, Copy)]
pub struct TryAttributeEquals<F, V> {
    selector: F,
    target: V,
}

impl<F, V> TryAttributeEquals<F, V> {
    /// Create a predicate comparing the selected value with `target`.
    pub fn new(selector: F, target: V) -> Self {
        Self { selector, target }
    }

    /// The value items are compared against.
    pub fn target(&self) -> &V {
        &self.target
    }
}

impl<T: ?Sized, F, V, E> TryPredicate<T> for TryAttributeEquals<F, V>
where
    F: Fn(&T) -> Result<V, E> + Send + Sync,
    V: PartialEq + Send + Sync,
{
    type Error = E;

    #[inline]
    fn try_evaluate(&self, item: &T) -> Result<bool, E> {
        Ok((self.selector)(item)? == self.target)
    }
}

impl<F, V: fmt::Debug> fmt::Debug for TryAttributeEquals<F, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryAttributeEquals")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Create a [`TryAttributeEquals`] predicate.
pub fn try_attribute_eq<F, V>(selector: F, target: V) -> TryAttributeEquals<F, V> {
    TryAttributeEquals::new(selector, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Shade {
        Light,
        Dark,
    }

    struct Tile {
        shade: Shade,
        edge: u32,
    }

    #[test]
    fn test_matches_selected_value() {
        let dark = attribute_eq(|t: &Tile| t.shade, Shade::Dark);
        assert!(dark.evaluate(&Tile { shade: Shade::Dark, edge: 1 }));
        assert!(!dark.evaluate(&Tile { shade: Shade::Light, edge: 1 }));
        assert_eq!(dark.target(), &Shade::Dark);
    }

    #[test]
    fn test_combines_with_and() {
        let big_dark =
            attribute_eq(|t: &Tile| t.edge, 10).and(attribute_eq(|t: &Tile| t.shade, Shade::Dark));
        assert!(big_dark.evaluate(&Tile { shade: Shade::Dark, edge: 10 }));
        assert!(!big_dark.evaluate(&Tile { shade: Shade::Dark, edge: 9 }));
    }

    #[test]
    fn test_and_with_itself_is_idempotent() {
        let dark = attribute_eq(|t: &Tile| t.shade, Shade::Dark);
        let twice = dark.and(dark);
        for shade in [Shade::Light, Shade::Dark] {
            let tile = Tile { shade, edge: 0 };
            assert_eq!(twice.evaluate(&tile), dark.evaluate(&tile));
        }
    }

    #[test]
    #[should_panic(expected = "selector blew up")]
    fn test_selector_panic_propagates() {
        let p = attribute_eq(|_: &Tile| -> u32 { panic!("selector blew up") }, 0);
        p.evaluate(&Tile { shade: Shade::Light, edge: 0 });
    }

    #[test]
    fn test_try_selector_error_is_unmodified() {
        #[derive(Debug, PartialEq)]
        struct NoEdge(u32);

        let p = try_attribute_eq(
            |t: &Tile| if t.edge == 0 { Err(NoEdge(t.edge)) } else { Ok(t.shade) },
            Shade::Light,
        );
        assert_eq!(p.try_evaluate(&Tile { shade: Shade::Light, edge: 2 }), Ok(true));
        assert_eq!(p.try_evaluate(&Tile { shade: Shade::Dark, edge: 2 }), Ok(false));
        assert_eq!(p.try_evaluate(&Tile { shade: Shade::Dark, edge: 0 }), Err(NoEdge(0)));
    }

    #[test]
    fn test_debug_shows_target() {
        let p = attribute_eq(|t: &Tile| t.edge, 3u32);
        assert_eq!(format!("{p:?}"), "AttributeEquals { target: 3, .. }");
    }
}
