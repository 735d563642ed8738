//! Response generator: keyword lookup with a random fallback.

mod defaults;
mod keywords;
pub mod parser;

use log::{debug, error, info};
use rand::{Rng, rngs::ThreadRng};

use crate::config::Config;

pub use defaults::{DefaultResponses, FALLBACK_RESPONSE};
pub use keywords::{KeywordEntry, KeywordTable};

/// Generates replies from a keyword table and a list of default replies.
///
/// Both tables are filled once at construction and never change afterwards.
#[derive(Debug)]
pub struct Responder<R = ThreadRng> {
    keywords: KeywordTable,
    defaults: DefaultResponses,
    rng: R,
}

impl Responder<ThreadRng> {
    /// Loads both response files named in `config`, drawing defaults from the
    /// thread-local generator.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> Responder<R> {
    /// Loads both response files named in `config`.
    ///
    /// Load failures are logged and never fatal: an unreadable keyword file
    /// leaves its table empty or partial, and the default list always ends up
    /// with at least one reply.
    pub fn with_rng(config: &Config, rng: R) -> Self {
        let mut keywords = KeywordTable::new();
        match keywords.load_file(&config.responses_path) {
            Ok(count) => info!(
                "Loaded {count} keyword responses from {}",
                config.responses_path.display()
            ),
            Err(e) => error!("{e}"),
        }

        let mut defaults = DefaultResponses::new();
        match defaults.load_file(&config.defaults_path) {
            Ok(count) => info!(
                "Loaded {count} default responses from {}",
                config.defaults_path.display()
            ),
            Err(e) => error!("{e}"),
        }

        Self::from_tables(keywords, defaults, rng)
    }

    /// Builds a responder from tables filled elsewhere.
    pub fn from_tables(keywords: KeywordTable, mut defaults: DefaultResponses, rng: R) -> Self {
        defaults.ensure_fallback();
        Self {
            keywords,
            defaults,
            rng,
        }
    }

    /// Returns the reply for the first input word found in the keyword table,
    /// or a random default reply when none is.
    ///
    /// Words are tried in the iteration order of `words`. For one word, the
    /// earliest loaded entry listing it wins. When several input words match
    /// different entries, which one is returned follows the input order, and
    /// so is unspecified for hash-based sets.
    pub fn generate_response<I, S>(&mut self, words: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if let Some(response) = self.keywords.find(word) {
                debug!("Keyword match on '{word}'");
                return response;
            }
        }

        debug!("No keyword matched, picking a default response");
        self.defaults.pick(&mut self.rng)
    }

    #[must_use]
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    #[must_use]
    pub fn defaults(&self) -> &DefaultResponses {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, fs, path::Path};

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn words(list: &[&str]) -> HashSet<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn responder_in(
        dir: &Path,
        responses: Option<&str>,
        defaults: Option<&str>,
    ) -> Responder<StdRng> {
        let config = Config::new(dir.join("responses.txt"), dir.join("default.txt"));
        if let Some(text) = responses {
            fs::write(&config.responses_path, text).expect("write responses");
        }
        if let Some(text) = defaults {
            fs::write(&config.defaults_path, text).expect("write defaults");
        }
        Responder::with_rng(&config, StdRng::seed_from_u64(3))
    }

    #[test]
    fn keyword_reply_for_any_listed_word() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut responder =
            responder_in(dir.path(), Some("hello, hi\nHi there!\n\n"), Some("Hmm.\n"));

        assert_eq!(responder.generate_response(&words(&["hello"])), "Hi there!\n");
        assert_eq!(responder.generate_response(&words(&["hi"])), "Hi there!\n");
    }

    #[test]
    fn unknown_word_gets_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut responder = responder_in(
            dir.path(),
            Some("hello\nHi there!\n"),
            Some("Hmm.\n\nGo on.\n"),
        );

        for _ in 0..50 {
            let reply = responder.generate_response(&words(&["weather"])).to_string();
            assert_ne!(reply, "Hi there!\n");
            assert!(responder.defaults().contains(&reply));
        }
    }

    #[test]
    fn empty_input_gets_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut responder = responder_in(dir.path(), Some("hello\nHi there!\n"), Some("Hmm.\n"));

        assert_eq!(responder.generate_response(HashSet::<String>::new()), "Hmm.\n");
    }

    #[test]
    fn any_matching_word_gives_keyword_reply() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut responder = responder_in(
            dir.path(),
            Some("crash\nDoes it crash often?\n\nslow\nHow slow?\n"),
            Some("Hmm.\n"),
        );

        let reply = responder
            .generate_response(&words(&["my", "app", "is", "slow", "and", "crash"]))
            .to_string();
        assert!(reply == "Does it crash often?\n" || reply == "How slow?\n");
    }

    #[test]
    fn multi_line_reply_is_preserved() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut responder = responder_in(
            dir.path(),
            Some("bug\nAll software has bugs.\nPlease describe it.\n\n"),
            None,
        );

        assert_eq!(
            responder.generate_response(["bug"]),
            "All software has bugs.\nPlease describe it.\n"
        );
    }

    #[test]
    fn missing_files_degrade_to_fallback() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut responder = responder_in(dir.path(), None, None);

        assert!(responder.keywords().is_empty());
        assert_eq!(responder.defaults().len(), 1);
        assert_eq!(responder.generate_response(["hello"]), FALLBACK_RESPONSE);
    }

    #[test]
    fn empty_default_file_gets_fallback() {
        let dir = tempfile::tempdir().expect("temp dir");
        let responder = responder_in(dir.path(), Some(""), Some("\n\n"));

        assert_eq!(responder.defaults().iter().collect::<Vec<_>>(), vec![FALLBACK_RESPONSE]);
    }

    #[test]
    fn from_tables_repairs_empty_defaults() {
        let mut keywords = KeywordTable::new();
        keywords.insert(" foo ,bar", "Found.\n");
        let mut responder =
            Responder::from_tables(keywords, DefaultResponses::new(), StdRng::seed_from_u64(9));

        assert_eq!(responder.generate_response(["foo"]), "Found.\n");
        assert_eq!(responder.generate_response(["bar"]), "Found.\n");
        assert_eq!(responder.generate_response(["baz"]), FALLBACK_RESPONSE);
    }
}
