//! Product Filter Example
//!
//! Filters a small product catalog by color and size, then combines the
//! filters without writing a dedicated "by size and color" method.
//!
//! Run with: cargo run --example product_filter

use solidspec::catalog::{color_is, size_is, Color, Product, Size};
use solidspec::prelude::*;

fn main() {
    println!("=== Product Filter Example ===\n");

    let products = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ];

    println!("Green products:");
    let green = color_is(Color::Green);
    for p in filter(&products, &green) {
        println!(" - {} is green", p.name());
    }

    println!("Large products:");
    let large = size_is(Size::Large);
    for p in filter(&products, &large) {
        println!(" - {} is large", p.name());
    }

    println!("Large blue items:");
    let large_blue = size_is(Size::Large).and(color_is(Color::Blue));
    for p in filter(&products, &large_blue) {
        println!(" - {} is large and blue", p.name());
    }

    println!("Anything but green:");
    let not_green = color_is(Color::Green).not();
    for p in products.iter().satisfying(&not_green) {
        println!(" - {p}");
    }

    match AndPredicate::<Product>::try_new(Vec::new()) {
        Ok(_) => println!("\nunexpected: empty composite accepted"),
        Err(err) => println!("\nEmpty composite rejected: {err}"),
    }
}
