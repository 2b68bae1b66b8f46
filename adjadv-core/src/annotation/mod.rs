//! Annotation capability
//!
//! An annotator turns one line of raw text into sentences of tagged,
//! dependency-linked tokens. The extractor only depends on the
//! [`Annotator`] trait, so any tagging/parsing backend can be plugged in.

pub mod command;

pub use command::CommandAnnotator;

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};

/// Fine-grained tag for adjectives
pub const ADJECTIVE_TAG: &str = "JJ";
/// Fine-grained tag for adverbs
pub const ADVERB_TAG: &str = "RB";
/// Prefix shared by all verb tags (VB, VBD, VBG, VBN, VBP, VBZ)
pub const VERB_TAG_PREFIX: &str = "VB";

/// Trait for annotation backends
pub trait Annotator {
    /// Split `line` into sentences and tag/parse each one
    fn annotate(&mut self, line: &str) -> Result<Vec<Sentence>>;
}

impl<A: Annotator + ?Sized> Annotator for &mut A {
    fn annotate(&mut self, line: &str) -> Result<Vec<Sentence>> {
        (**self).annotate(line)
    }
}

/// A single annotated token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form
    pub text: String,
    /// Fine-grained part-of-speech tag
    pub tag: String,
    /// Index of the governing token in the same sentence (root points at itself)
    pub head: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, tag: impl Into<String>, head: usize) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            head,
        }
    }

    pub fn is_adjective(&self) -> bool {
        self.tag == ADJECTIVE_TAG
    }

    pub fn is_adverb(&self) -> bool {
        self.tag == ADVERB_TAG
    }

    pub fn is_verb(&self) -> bool {
        self.tag.starts_with(VERB_TAG_PREFIX)
    }
}

/// An annotated sentence with validated head links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Create a sentence, checking every head index is in range
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        if let Some((index, token)) = tokens
            .iter()
            .enumerate()
            .find(|(_, token)| token.head >= tokens.len())
        {
            return Err(ExtractError::protocol(format!(
                "token {index} ('{}') has head {} but the sentence has {} tokens",
                token.text,
                token.head,
                tokens.len()
            )));
        }

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token governing the token at `index`
    pub fn head_of(&self, index: usize) -> Option<&Token> {
        let head = self.tokens.get(index)?.head;
        self.tokens.get(head)
    }

    /// Surface forms in order
    pub fn texts(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }
}
