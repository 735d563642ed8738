//! Turns a line of user input into the word set handed to the responder.

use std::collections::HashSet;

/// Lowercases `line` and splits it on whitespace.
#[must_use]
pub fn split_words(line: &str) -> HashSet<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
