//! Word dictionaries.
//!
//! A [`WordDictionary`] is an immutable, densely indexed list of words read
//! from a newline-delimited resource, one entry per non-empty line, in file
//! order. Dictionaries are loaded once at startup and shared read-only by
//! every request.

pub mod embedded;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DicewareError;
use crate::password::is_eligible_word;

/// Name given to the simple dictionary.
pub const SIMPLE: &str = "simple";

/// Name given to the complex (extended) dictionary.
pub const COMPLEX: &str = "complex";

/// An immutable, densely indexed word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDictionary {
    name: String,
    entries: Vec<String>,
}

impl WordDictionary {
    /// Build a dictionary from already-split words.
    ///
    /// Blank entries are dropped and surrounding whitespace is trimmed, the
    /// same way lines of a resource are treated.
    ///
    /// # Errors
    ///
    /// Returns [`DicewareError::EmptyDictionary`] if no words remain and
    /// [`DicewareError::NoEligibleWords`] if none of them can ever be sampled.
    pub fn from_words<I, S>(name: &str, words: I) -> Result<Self, DicewareError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<String> = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                (!w.is_empty()).then(|| w.to_string())
            })
            .collect();

        if entries.is_empty() {
            return Err(DicewareError::EmptyDictionary(name.to_string()));
        }
        if !entries.iter().any(|w| is_eligible_word(w)) {
            return Err(DicewareError::NoEligibleWords(name.to_string()));
        }

        tracing::debug!(dictionary = name, count = entries.len(), "dictionary loaded");

        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }

    /// Parse a newline-delimited string.
    ///
    /// # Errors
    ///
    /// See [`WordDictionary::from_words`].
    pub fn parse(name: &str, raw: &str) -> Result<Self, DicewareError> {
        Self::from_words(name, raw.lines())
    }

    /// Read a newline-delimited resource.
    ///
    /// # Errors
    ///
    /// Returns [`DicewareError::Io`] if a line cannot be read, otherwise see
    /// [`WordDictionary::from_words`].
    pub fn from_reader<R: BufRead>(name: &str, reader: R) -> Result<Self, DicewareError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_words(name, lines)
    }

    /// Read a newline-delimited file.
    ///
    /// # Errors
    ///
    /// Returns [`DicewareError::Io`] if the file cannot be opened or read,
    /// otherwise see [`WordDictionary::from_words`].
    pub fn load(name: &str, path: impl AsRef<Path>) -> Result<Self, DicewareError> {
        let file = File::open(path.as_ref())?;
        tracing::info!(dictionary = name, path = %path.as_ref().display(), "reading word list");
        Self::from_reader(name, BufReader::new(file))
    }

    /// Dictionary name, used in logs and errors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of words.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Word at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// All words, in file order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// The dictionaries handed to the generator.
///
/// `complex` is only present when the deployment enables extended words.
#[derive(Debug, Clone)]
pub struct WordCollection {
    simple: WordDictionary,
    complex: Option<WordDictionary>,
}

impl WordCollection {
    /// Collection from loaded dictionaries.
    #[must_use]
    pub const fn new(simple: WordDictionary, complex: Option<WordDictionary>) -> Self {
        Self { simple, complex }
    }

    /// The simple dictionary.
    #[must_use]
    pub const fn simple(&self) -> &WordDictionary {
        &self.simple
    }

    /// The complex dictionary, when loaded.
    #[must_use]
    pub const fn complex(&self) -> Option<&WordDictionary> {
        self.complex.as_ref()
    }

    /// Number of words in the simple dictionary.
    #[must_use]
    pub fn simple_count(&self) -> usize {
        self.simple.count()
    }

    /// Number of words in the complex dictionary, 0 when not loaded.
    #[must_use]
    pub fn complex_count(&self) -> usize {
        self.complex.as_ref().map_or(0, WordDictionary::count)
    }

    /// Pick the dictionary for a request.
    ///
    /// # Errors
    ///
    /// Returns [`DicewareError::DictionaryUnavailable`] when `use_extended`
    /// is set but no complex dictionary is loaded.
    pub fn select(&self, use_extended: bool) -> Result<&WordDictionary, DicewareError> {
        if use_extended {
            self.complex
                .as_ref()
                .ok_or(DicewareError::DictionaryUnavailable)
        } else {
            Ok(&self.simple)
        }
    }
}
