//! Product catalog used to demonstrate open-for-extension filtering
//!
//! Filtering products by a new property never requires touching existing
//! code: a new property is one more selector and one more constructor
//! function, and every combination of properties comes from composing the
//! predicates already here.
//!
//! # Example
//!
//! ```rust
//! use solidspec::catalog::{color_is, size_is, Color, Product, Size};
//! use solidspec::filter::filter;
//! use solidspec::predicate::PredicateExt;
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let large_blue = size_is(Size::Large).and(color_is(Color::Blue));
//! let names: Vec<_> = filter(&products, &large_blue).map(Product::name).collect();
//! assert_eq!(names, vec!["House"]);
//! ```

use std::fmt;

use crate::predicate::{attribute_eq, AttributeEquals};

/// Product color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Product size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    /// Small.
    Small,
    /// Medium.
    Medium,
    /// Large.
    Large,
}

impl Size {
    /// Every size, in declaration order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        };
        f.write_str(name)
    }
}

/// A named product with a color and a size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

impl Product {
    /// Create a product.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Product size.
    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

/// Predicate type returned by [`color_is`].
pub type ColorIs = AttributeEquals<fn(&Product) -> Color, Color>;

/// Predicate type returned by [`size_is`].
pub type SizeIs = AttributeEquals<fn(&Product) -> Size, Size>;

/// Predicate type returned by [`name_is`].
pub type NameIs = AttributeEquals<fn(&Product) -> String, String>;

/// Products of the given color.
pub fn color_is(color: Color) -> ColorIs {
    attribute_eq(Product::color as fn(&Product) -> Color, color)
}

/// Products of the given size.
pub fn size_is(size: Size) -> SizeIs {
    attribute_eq(Product::size as fn(&Product) -> Size, size)
}

/// Products with exactly the given name.
pub fn name_is(name: impl Into<String>) -> NameIs {
    fn owned_name(product: &Product) -> String {
        product.name.clone()
    }
    attribute_eq(owned_name as fn(&Product) -> String, name.into())
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use super::{Color, Product, Size};

    impl Arbitrary for Color {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop::sample::select(Color::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for Size {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop::sample::select(Size::ALL.to_vec()).boxed()
        }
    }

    impl Arbitrary for Product {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            ("[A-Z][a-z]{0,8}", any::<Color>(), any::<Size>())
                .prop_map(|(name, color, size)| Product::new(name, color, size))
                .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter;
    use crate::predicate::{Predicate, PredicateExt};

    fn products() -> Vec<Product> {
        vec![
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
        ]
    }

    fn names<'a>(items: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        items.map(Product::name).collect()
    }

    #[test]
    fn test_green_products() {
        let products = products();
        let green = color_is(Color::Green);
        assert_eq!(names(filter(&products, &green)), vec!["Apple", "Tree"]);
    }

    #[test]
    fn test_large_products() {
        let products = products();
        let large = size_is(Size::Large);
        assert_eq!(names(filter(&products, &large)), vec!["Tree", "House"]);
    }

    #[test]
    fn test_large_and_blue() {
        let products = products();
        let large_blue = size_is(Size::Large).and(color_is(Color::Blue));
        assert_eq!(names(filter(&products, &large_blue)), vec!["House"]);
    }

    #[test]
    fn test_name_is() {
        let products = products();
        let tree = name_is("Tree");
        assert_eq!(names(filter(&products, &tree)), vec!["Tree"]);
        assert!(!name_is("tree").evaluate(&products[1]));
    }

    #[test]
    fn test_no_red_products() {
        let products = products();
        let red = color_is(Color::Red);
        assert_eq!(filter(&products, &red).count(), 0);
    }

    #[test]
    fn test_display() {
        let apple = Product::new("Apple", Color::Green, Size::Small);
        assert_eq!(apple.to_string(), "Apple (green, small)");
        assert_eq!(Color::Blue.to_string(), "blue");
        assert_eq!(Size::Medium.to_string(), "medium");
    }
}
