//! A journal, and the separate component that persists it
//!
//! `Journal` only manages entries. Reading and writing files is the job of
//! [`PersistenceManager`], so storage can change (another format, another
//! medium) without `Journal` changing at all.
//!
//! # Example
//!
//! ```rust
//! use solidspec::journal::Journal;
//!
//! let mut journal = Journal::new();
//! journal.add_entry("I cried today.");
//! journal.add_entry("I ate a bug.");
//! assert_eq!(journal.to_string(), "0: I cried today.\n1: I ate a bug.");
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::JournalError;

/// Numbered text entries.
///
/// Numbers come from a counter that only ever grows, so removing an entry
/// never causes a number to be handed out twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "StoredJournal")
)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the number it was given.
    pub fn add_entry(&mut self, text: impl AsRef<str>) -> usize {
        let number = self.count;
        self.entries.push(format!("{number}: {}", text.as_ref()));
        self.count += 1;
        number
    }

    /// Remove the entry at `position`, returning its text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use solidspec::journal::Journal;
    ///
    /// let mut journal = Journal::new();
    /// journal.add_entry("first");
    /// assert_eq!(journal.remove_entry(0).unwrap(), "0: first");
    /// assert!(journal.remove_entry(0).is_err());
    /// ```
    pub fn remove_entry(&mut self, position: usize) -> Result<String, JournalError> {
        if position >= self.entries.len() {
            return Err(JournalError::EntryOutOfRange {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    /// Rendered entries, in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number the next entry will receive.
    pub fn next_number(&self) -> usize {
        self.count
    }

    fn from_rendered(entries: Vec<String>) -> Self {
        let count = entries
            .iter()
            .filter_map(|entry| entry.split_once(": "))
            .filter_map(|(number, _)| number.parse::<usize>().ok())
            .map(|number| number + 1)
            .max()
            .unwrap_or(entries.len());
        Self { entries, count }
    }
}

/// Serialized form; the counter is re-derived so it never falls behind the
/// numbers already present in `entries`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StoredJournal {
    entries: Vec<String>,
    #[serde(default)]
    count: usize,
}

#[cfg(feature = "serde")]
impl From<StoredJournal> for Journal {
    fn from(stored: StoredJournal) -> Self {
        let mut journal = Journal::from_rendered(stored.entries);
        journal.count = journal.count.max(stored.count);
        journal
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

// One entry per line: backslashes and line breaks inside an entry are escaped.
fn escape_entry(entry: &str) -> String {
    let mut out = String::with_capacity(entry.len());
    for c in entry.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape_entry(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Saves and loads journals as plain text, one entry per line.
///
/// Line breaks inside an entry are written as `\n` (and a literal backslash
/// as `\\`), so multi-line entries survive a save/load cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistenceManager;

impl PersistenceManager {
    /// Write the journal to `path`, one escaped entry per line, replacing any
    /// file there.
    pub fn save_to_file(journal: &Journal, path: impl AsRef<Path>) -> Result<(), JournalError> {
        let path = path.as_ref();
        let text = journal
            .entries()
            .iter()
            .map(|entry| escape_entry(entry))
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(path, text)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), entries = journal.len(), "saved journal");

        Ok(())
    }

    /// Read a journal previously written by [`save_to_file`](Self::save_to_file).
    ///
    /// Blank lines are ignored. Numbering resumes after the highest entry
    /// number found in the file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Journal, JournalError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let entries: Vec<String> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(unescape_entry)
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), entries = entries.len(), "loaded journal");

        Ok(Journal::from_rendered(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_numbered() {
        let mut journal = Journal::new();
        assert_eq!(journal.add_entry("a"), 0);
        assert_eq!(journal.add_entry("b"), 1);
        assert_eq!(journal.entries(), &["0: a".to_string(), "1: b".to_string()]);
    }

    #[test]
    fn test_numbers_are_not_reused_after_removal() {
        let mut journal = Journal::new();
        journal.add_entry("a");
        journal.add_entry("b");
        journal.remove_entry(1).unwrap();
        assert_eq!(journal.add_entry("c"), 2);
        assert_eq!(journal.to_string(), "0: a\n2: c");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut journal = Journal::new();
        journal.add_entry("only");
        let err = journal.remove_entry(3).unwrap_err();
        assert!(matches!(
            err,
            JournalError::EntryOutOfRange { position: 3, len: 1 }
        ));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_empty_journal_renders_empty() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.to_string(), "");
    }

    #[test]
    fn test_from_rendered_resumes_numbering() {
        let journal = Journal::from_rendered(vec!["0: a".into(), "4: e".into()]);
        assert_eq!(journal.next_number(), 5);
    }

    #[test]
    fn test_from_rendered_without_numbers_uses_len() {
        let journal = Journal::from_rendered(vec!["free text".into(), "more".into()]);
        assert_eq!(journal.next_number(), 2);
    }

    #[test]
    fn test_escape_round_trips_special_characters() {
        for entry in ["0: plain", "1: a\nb", "2: back\\slash\\n", "3: \r\n\n", "4: trailing\\"] {
            let escaped = escape_entry(entry);
            assert!(!escaped.contains('\n'));
            assert_eq!(unescape_entry(&escaped), entry);
        }
    }
}
