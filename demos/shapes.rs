//! Shapes Example
//!
//! Resizes rectangles the way a caller relying on independent sides would,
//! including one built from a square, and checks the resulting areas.
//!
//! Run with: cargo run --example shapes

use solidspec::filter::filter;
use solidspec::shapes::{is_square, substitution_check, Rectangle, Square};

fn main() {
    let mut shapes = vec![
        Rectangle::new(2, 3),
        Rectangle::from(Square::new(5)),
        Rectangle::square(10),
    ];

    println!("Squares before resizing:");
    for rect in filter(&shapes, &is_square()) {
        println!(" - {rect}");
    }

    for rect in &mut shapes {
        let check = substitution_check(rect, 10);
        println!(
            "Expected an area of {}, got {} ({rect})",
            check.expected, check.actual
        );
    }

    println!("Squares after resizing:");
    for rect in filter(&shapes, &is_square()) {
        println!(" - {rect}");
    }
}
