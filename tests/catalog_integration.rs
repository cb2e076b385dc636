//! Integration tests for filtering the product catalog

use solidspec::catalog::{color_is, name_is, size_is, Color, Product, Size};
use solidspec::prelude::*;

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
fn green_products() {
    let products = products();
    let green = color_is(Color::Green);
    assert_eq!(names(filter(&products, &green)), vec!["Apple", "Tree"]);
}

#[test]
fn large_blue_products() {
    let products = products();
    let large_blue = size_is(Size::Large).and(color_is(Color::Blue));
    assert_eq!(names(filter(&products, &large_blue)), vec!["House"]);
}

#[test]
fn same_predicate_filters_many_collections() {
    let green = color_is(Color::Green);
    let first = products();
    let second = vec![
        Product::new("Leaf", Color::Green, Size::Small),
        Product::new("Sky", Color::Blue, Size::Large),
    ];
    assert_eq!(names(filter(&first, &green)), vec!["Apple", "Tree"]);
    assert_eq!(names(filter(&second, &green)), vec!["Leaf"]);
}

#[test]
fn composite_built_from_list() {
    let products = products();
    let spec = AndPredicate::try_new(vec![
        color_is(Color::Green).boxed(),
        size_is(Size::Large).boxed(),
        name_is("Tree").boxed(),
    ])
    .expect("non-empty list");
    assert_eq!(spec.len(), 3);
    assert_eq!(names(filter(&products, &spec)), vec!["Tree"]);
}

#[test]
fn empty_composite_is_rejected() {
    let children: Vec<BoxedPredicate<Product>> = Vec::new();
    assert_eq!(
        AndPredicate::try_new(children).unwrap_err(),
        ConstructionError::EmptyComposite { combinator: "and" }
    );
}

#[test]
fn or_and_not_compose_with_and() {
    let products = products();
    let small_or_blue = size_is(Size::Small).or(color_is(Color::Blue));
    assert_eq!(names(filter(&products, &small_or_blue)), vec!["Apple", "House"]);

    let not_green = color_is(Color::Green).not();
    assert_eq!(names(filter(&products, &not_green)), vec!["House"]);

    let large_not_blue = size_is(Size::Large).and(color_is(Color::Blue).not());
    assert_eq!(names(filter(&products, &large_not_blue)), vec!["Tree"]);
}

#[test]
fn owned_products_can_be_filtered() {
    let large = size_is(Size::Large);
    let kept: Vec<Product> = products().into_iter().satisfying(&large).collect();
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|p| p.size() == Size::Large));
}

#[test]
fn first_match_stops_early() {
    let products = products();
    let green = color_is(Color::Green);
    let mut pulled = 0;
    let first = products
        .iter()
        .inspect(|_| pulled += 1)
        .satisfying(&green)
        .next()
        .map(Product::name);
    assert_eq!(first, Some("Apple"));
    assert_eq!(pulled, 1);
}

#[test]
fn fallible_selector_error_reaches_caller() {
    #[derive(Debug, PartialEq)]
    struct Unlabelled(String);

    // Products without a capitalised name are treated as unlabelled stock.
    let labelled_green = try_attribute_eq(
        |p: &Product| {
            if p.name().starts_with(char::is_uppercase) {
                Ok(p.color())
            } else {
                Err(Unlabelled(p.name().to_owned()))
            }
        },
        Color::Green,
    );

    let mut products = products();
    products.insert(1, Product::new("crate", Color::Green, Size::Medium));

    let results: Vec<_> = try_filter(&products, &labelled_green)
        .map(|r| r.map(Product::name))
        .collect();
    assert_eq!(
        results,
        vec![Ok("Apple"), Err(Unlabelled("crate".to_string())), Ok("Tree")]
    );
}

#[cfg(feature = "serde")]
#[test]
fn product_serializes_with_variant_names() {
    let apple = Product::new("Apple", Color::Green, Size::Small);
    let json = serde_json::to_string(&apple).unwrap();
    assert_eq!(json, r#"{"name":"Apple","color":"Green","size":"Small"}"#);
    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, apple);
}
