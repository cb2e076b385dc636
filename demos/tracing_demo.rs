//! Demonstrates tracing output from filtering and persistence
//!
//! Run with: cargo run --example tracing_demo --features tracing

use solidspec::catalog::{color_is, size_is, Color, Product, Size};
use solidspec::journal::{Journal, PersistenceManager};
use solidspec::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let products = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ];
    let large_green = size_is(Size::Large).and(color_is(Color::Green));
    let first = filter(&products, &large_green).next();
    tracing::info!(first = ?first.map(Product::name), "first large green product");

    if let Err(err) = OrPredicate::<Product>::try_new(Vec::new()) {
        tracing::error!("{}", err);
    }

    let mut journal = Journal::new();
    journal.add_entry("traced entry");
    let path = std::env::temp_dir().join("solidspec-tracing-demo.txt");
    match PersistenceManager::save_to_file(&journal, &path) {
        Ok(()) => tracing::info!("journal saved"),
        Err(e) => tracing::error!("journal save failed: {}", e),
    }
}
