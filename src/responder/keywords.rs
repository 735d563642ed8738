//! Keyword table: raw comma-separated keys mapped to canned replies.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::error::{ResponderError, Result};

use super::parser::keyed_blocks;

/// A raw key as written in the file, with the reply it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub key: String,
    pub response: String,
}

impl KeywordEntry {
    /// Individual keywords of the raw key, trimmed.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.key
            .split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }

    /// Returns true when `word` equals one of the keywords exactly.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.keywords().any(|keyword| keyword == word)
    }
}

/// Keyword entries in insertion order.
///
/// Keys are compared as raw strings; inserting an existing key replaces its
/// reply in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

impl KeywordTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reply under a raw key, returning the reply it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        response: impl Into<String>,
    ) -> Option<String> {
        let key = key.into();
        let response = response.into();

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            debug!("Replacing response for key '{key}'");
            return Some(std::mem::replace(&mut entry.response, response));
        }

        self.entries.push(KeywordEntry { key, response });
        None
    }

    /// Reply of the first entry (in insertion order) listing `word`.
    #[must_use]
    pub fn find(&self, word: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.matches(word))
            .map(|entry| entry.response.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter()
    }

    /// Adds every keyword block read from `reader`.
    ///
    /// Blocks parsed before a read error stay in the table.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a line cannot be read.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut count = 0;
        for block in keyed_blocks(reader.lines()) {
            let block = block?;
            let key = block.header.unwrap_or_default();
            debug!("Loaded response for key '{key}'");
            self.insert(key, block.body);
            count += 1;
        }
        Ok(count)
    }

    /// Adds every keyword block from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ResponderError::Open`] if the file cannot be opened and
    /// [`ResponderError::Read`] if reading fails part way through.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let file = File::open(path).map_err(|source| ResponderError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_reader(BufReader::new(file))
            .map_err(|source| ResponderError::Read {
                path: path.to_path_buf(),
                source,
            })
    }
}
