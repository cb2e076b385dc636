//! Rectangles and squares that can stand in for one another safely
//!
//! A square whose setters silently change both sides breaks every caller that
//! assumes setting the height leaves the width alone. Here `Square` is its own
//! type; code that needs a rectangle converts it, after which the usual
//! rectangle rules hold. Rectangles that happen to be square are recognised
//! with [`Rectangle::is_square`] rather than a subtype.

use std::fmt;

/// Anything with an area.
pub trait Shape {
    /// Area in square units.
    fn area(&self) -> u64;
}

/// Axis-aligned rectangle with independently settable sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    /// Create a rectangle.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a rectangle whose sides are both `size`.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Change the width. The height is left untouched.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Change the height. The width is left untouched.
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    /// Whether both sides are currently equal.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Width: {}, height: {}", self.width, self.height)
    }
}

/// Square with a single side length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    size: u32,
}

impl Square {
    /// Create a square.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Change the side length.
    pub fn set_size(&mut self, size: u32) {
        self.size = size;
    }
}

impl Shape for Square {
    fn area(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size: {}", self.size)
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle::square(square.size)
    }
}

/// Area a caller expected after resizing, next to the area it got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCheck {
    /// Old width times the new height.
    pub expected: u64,
    /// Area reported after the resize.
    pub actual: u64,
}

impl AreaCheck {
    /// Whether the resize behaved as the caller assumed.
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Set the height of `rectangle` and compare the resulting area with the one
/// a caller relying on independent sides would expect.
///
/// # Example
///
/// ```rust
/// use solidspec::shapes::{substitution_check, Rectangle, Square};
///
/// let mut plain = Rectangle::new(2, 3);
/// assert!(substitution_check(&mut plain, 10).holds());
///
/// let mut from_square = Rectangle::from(Square::new(5));
/// let check = substitution_check(&mut from_square, 10);
/// assert_eq!(check.expected, 50);
/// assert_eq!(check.actual, 50);
/// ```
pub fn substitution_check(rectangle: &mut Rectangle, new_height: u32) -> AreaCheck {
    let width = rectangle.width();
    rectangle.set_height(new_height);
    AreaCheck {
        expected: u64::from(width) * u64::from(new_height),
        actual: rectangle.area(),
    }
}

/// Predicate accepting rectangles whose sides are equal.
///
/// # Example
///
/// ```rust
/// use solidspec::filter::filter;
/// use solidspec::shapes::{is_square, Rectangle};
///
/// let shapes = [Rectangle::new(2, 3), Rectangle::square(4), Rectangle::new(7, 7)];
/// assert_eq!(filter(&shapes, &is_square()).count(), 2);
/// ```
pub fn is_square() -> fn(&Rectangle) -> bool {
    Rectangle::is_square
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{attribute_eq, Predicate, PredicateExt};

    #[test]
    fn test_setters_are_independent() {
        let mut rect = Rectangle::new(2, 3);
        rect.set_height(10);
        assert_eq!(rect.width(), 2);
        rect.set_width(4);
        assert_eq!(rect.height(), 10);
        assert_eq!(rect.area(), 40);
    }

    #[test]
    fn test_substitution_holds_for_square_rectangles() {
        for size in [0, 1, 5, 1000] {
            let mut rect = Rectangle::square(size);
            assert!(substitution_check(&mut rect, 10).holds());
            assert_eq!(rect.width(), size);
        }
    }

    #[test]
    fn test_square_conversion() {
        let mut square = Square::new(3);
        square.set_size(6);
        let rect: Rectangle = square.into();
        assert_eq!(rect, Rectangle::new(6, 6));
        assert_eq!(rect.area(), square.area());
    }

    #[test]
    fn test_shapes_through_trait_objects() {
        let shapes: Vec<Box<dyn Shape>> =
            vec![Box::new(Rectangle::new(2, 3)), Box::new(Square::new(4))];
        let total: u64 = shapes.iter().map(|s| s.area()).sum();
        assert_eq!(total, 22);
    }

    #[test]
    fn test_area_does_not_overflow() {
        let rect = Rectangle::new(u32::MAX, u32::MAX);
        assert_eq!(rect.area(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }

    #[test]
    fn test_is_square_composes() {
        let wide_square = is_square().and(attribute_eq(|r: &Rectangle| r.width() > 5, true));
        assert!(wide_square.evaluate(&Rectangle::square(6)));
        assert!(!wide_square.evaluate(&Rectangle::square(5)));
        assert!(!wide_square.evaluate(&Rectangle::new(6, 7)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rectangle::new(2, 3).to_string(), "Width: 2, height: 3");
        assert_eq!(Square::new(5).to_string(), "Size: 5");
    }
}
