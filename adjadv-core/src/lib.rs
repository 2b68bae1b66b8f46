//! Adjective/adverb example extraction
//!
//! This crate builds a labeled dataset of sentences in which an adjective
//! or an adverb modifies a verb. The pipeline is strictly sequential:
//!
//! 1. [`Lexicon`] loads the adjective and adverb word lists.
//! 2. [`MorphologyMap`] pairs adjectives with adverbs through ordered
//!    suffix rules validated against the lexicon.
//! 3. [`CorpusScanner`] lists corpus files and yields non-markup lines.
//! 4. An [`Annotator`] tags and parses each line.
//! 5. [`ExampleCollector`] keeps tokens tagged `JJ`/`RB` whose head is a
//!    verb and whose text has a counterpart in the map.
//! 6. [`Dataset`] truncates each label and writes one JSON array.
//!
//! # Example
//!
//! ```rust
//! use adjadv_core::{Lexicon, MorphologyMap};
//!
//! let lexicon = Lexicon::from_words(["angry", "good"], ["angrily", "well"]);
//! let map = MorphologyMap::build(&lexicon);
//!
//! assert_eq!(map.adverb_for("angry"), Some("angrily"));
//! assert_eq!(map.adjective_for("well"), Some("good"));
//! ```

pub mod annotation;
pub mod collector;
pub mod config;
pub mod corpus;
pub mod dataset;
pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod morphology;

// Re-export key types
pub use annotation::{Annotator, CommandAnnotator, Sentence, Token};
pub use collector::{Collected, Example, ExampleCollector, Label};
pub use config::{ExtractConfig, ExtractConfigBuilder};
pub use corpus::CorpusScanner;
pub use dataset::{Dataset, Summary};
pub use error::{ExtractError, Result};
pub use extractor::{Extractor, NoopObserver, ScanObserver};
pub use lexicon::Lexicon;
pub use morphology::{adjective_to_adverb, MorphologyMap};
