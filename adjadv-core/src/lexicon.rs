//! Adjective and adverb word lists
//!
//! Both lists are newline-delimited, one lowercase word per line. They act
//! as validity oracles for the morphology rules and are never mutated after
//! loading.

use crate::error::{ExtractError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The two word sets
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    adjectives: HashSet<String>,
    adverbs: HashSet<String>,
}

impl Lexicon {
    /// Load both word lists from disk
    pub fn load(adjectives: &Path, adverbs: &Path) -> Result<Self> {
        let lexicon = Self {
            adjectives: read_word_list(adjectives)?,
            adverbs: read_word_list(adverbs)?,
        };

        log::debug!(
            "Loaded {} adjectives and {} adverbs",
            lexicon.adjectives.len(),
            lexicon.adverbs.len()
        );

        Ok(lexicon)
    }

    /// Build a lexicon from in-memory words
    pub fn from_words<A, B>(adjectives: A, adverbs: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            adjectives: adjectives.into_iter().map(Into::into).collect(),
            adverbs: adverbs.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `word` is a known adjective
    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(word)
    }

    /// Whether `word` is a known adverb
    pub fn is_adverb(&self, word: &str) -> bool {
        self.adverbs.contains(word)
    }

    /// Iterate adjectives (unordered)
    pub fn adjectives(&self) -> impl Iterator<Item = &str> {
        self.adjectives.iter().map(String::as_str)
    }

    pub fn adjective_count(&self) -> usize {
        self.adjectives.len()
    }

    pub fn adverb_count(&self) -> usize {
        self.adverbs.len()
    }
}

/// Read a word list, one entry per line, skipping blank lines
fn read_word_list(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect())
}
