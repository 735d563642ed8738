//! Fallback replies used when no keyword matches.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::debug;
use rand::{Rng, seq::IndexedRandom};

use crate::error::{ResponderError, Result};

use super::parser::default_blocks;

/// Reply used when the default file yields nothing.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

/// Ordered list of fallback replies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultResponses {
    responses: Vec<String>,
}

impl DefaultResponses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, response: impl Into<String>) {
        self.responses.push(response.into());
    }

    /// Inserts [`FALLBACK_RESPONSE`] if the list is empty. Returns true when it did.
    pub fn ensure_fallback(&mut self) -> bool {
        if !self.responses.is_empty() {
            return false;
        }
        debug!("No default responses loaded, using built-in fallback");
        self.responses.push(FALLBACK_RESPONSE.to_string());
        true
    }

    /// Picks one reply uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.responses
            .choose(rng)
            .map_or(FALLBACK_RESPONSE, String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    #[must_use]
    pub fn contains(&self, response: &str) -> bool {
        self.responses.iter().any(|candidate| candidate == response)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.responses.iter().map(String::as_str)
    }

    /// Appends every reply block read from `reader`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if a line cannot be read. Replies
    /// parsed before the error are kept.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut count = 0;
        for block in default_blocks(reader.lines()) {
            self.responses.push(block?.body);
            count += 1;
        }
        Ok(count)
    }

    /// Appends every reply block from the file at `path`.
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

impl<S: Into<String>> FromIterator<S> for DefaultResponses {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            responses: iter.into_iter().map(Into::into).collect(),
        }
    }
}
