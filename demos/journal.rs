//! Journal Example
//!
//! Keeps entries in a `Journal` and hands saving/loading to a separate
//! `PersistenceManager`.
//!
//! Run with: cargo run --example journal

use std::env;

use solidspec::journal::{Journal, PersistenceManager};
use solidspec::JournalError;

fn main() -> Result<(), JournalError> {
    let mut journal = Journal::new();
    journal.add_entry("I cried today.");
    journal.add_entry("I ate a bug.");
    println!("Journal entries:\n{journal}\n");

    let path = env::temp_dir().join("solidspec-journal.txt");
    PersistenceManager::save_to_file(&journal, &path)?;
    println!("Saved to {}", path.display());

    let loaded = PersistenceManager::load_from_file(&path)?;
    println!("Read back:\n{loaded}");

    if let Err(err) = journal.remove_entry(5) {
        println!("\nExpected failure: {err}");
    }
    Ok(())
}
