//! Word lists shipped with the crate.
//!
//! Both lists are embedded at compile time via `include_str!` and parsed
//! when a collection is built, which the server does once at startup.

use super::{WordCollection, WordDictionary, COMPLEX, SIMPLE};
use crate::error::DicewareError;

const SIMPLE_RAW: &str = include_str!("wordlists/words-simple.txt");
const COMPLEX_RAW: &str = include_str!("wordlists/words-complex.txt");

/// The embedded simple dictionary.
///
/// # Errors
///
/// Only fails if the embedded list is broken.
pub fn simple() -> Result<WordDictionary, DicewareError> {
    WordDictionary::parse(SIMPLE, SIMPLE_RAW)
}

/// The embedded complex (extended) dictionary.
///
/// # Errors
///
/// Only fails if the embedded list is broken.
pub fn complex() -> Result<WordDictionary, DicewareError> {
    WordDictionary::parse(COMPLEX, COMPLEX_RAW)
}

/// Collection of the embedded lists; the complex list is only parsed when
/// `extended` is set.
///
/// # Errors
///
/// Only fails if an embedded list is broken.
pub fn collection(extended: bool) -> Result<WordCollection, DicewareError> {
    let complex = if extended { Some(complex()?) } else { None };
    Ok(WordCollection::new(simple()?, complex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::is_eligible_word;

    #[test]
    fn simple_count_matches_raw_lines() {
        let expected = SIMPLE_RAW.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(simple().unwrap().count(), expected);
    }

    #[test]
    fn complex_is_larger_than_simple() {
        assert!(complex().unwrap().count() > simple().unwrap().count());
    }

    #[test]
    fn mostly_eligible_words() {
        for dict in [simple().unwrap(), complex().unwrap()] {
            let eligible = dict.entries().iter().filter(|w| is_eligible_word(w)).count();
            assert!(
                eligible * 2 > dict.count(),
                "{} has too few eligible words: {eligible}/{}",
                dict.name(),
                dict.count()
            );
        }
    }

    #[test]
    fn all_lowercase_ascii() {
        for dict in [simple().unwrap(), complex().unwrap()] {
            for (i, word) in dict.entries().iter().enumerate() {
                assert!(
                    word.bytes().all(|b| b.is_ascii_lowercase()),
                    "{} word at index {i} ('{word}') is not lowercase ascii",
                    dict.name()
                );
            }
        }
    }

    #[test]
    fn collection_respects_extended_flag() {
        assert!(collection(false).unwrap().complex().is_none());
        assert!(collection(true).unwrap().complex().is_some());
    }
}
