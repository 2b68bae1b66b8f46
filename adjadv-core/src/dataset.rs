//! Balanced dataset sampling and JSON output

use crate::collector::{Collected, Example, Label};
use crate::error::{ExtractError, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Default maximum number of examples per label
pub const DEFAULT_PER_LABEL_CAP: usize = 10_000;

/// Counts reported to the operator after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Adjective matches before truncation
    pub adjectives_found: usize,
    /// Adverb matches before truncation
    pub adverbs_found: usize,
    pub adjectives_kept: usize,
    pub adverbs_kept: usize,
}

impl Summary {
    pub fn total_kept(&self) -> usize {
        self.adjectives_kept + self.adverbs_kept
    }
}

/// Adjective examples followed by adverb examples, each truncated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    examples: Vec<Example>,
    summary: Summary,
}

impl Dataset {
    /// Keep the first `per_label_cap` examples of each label
    pub fn sample(collected: Collected, per_label_cap: usize) -> Self {
        let Collected {
            mut adjectives,
            mut adverbs,
            ..
        } = collected;

        let adjectives_found = adjectives.len();
        let adverbs_found = adverbs.len();
        adjectives.truncate(per_label_cap);
        adverbs.truncate(per_label_cap);

        let summary = Summary {
            adjectives_found,
            adverbs_found,
            adjectives_kept: adjectives.len(),
            adverbs_kept: adverbs.len(),
        };

        let mut examples = adjectives;
        examples.append(&mut adverbs);

        Self { examples, summary }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of examples carrying `label`
    pub fn count(&self, label: Label) -> usize {
        self.examples.iter().filter(|e| e.label == label).count()
    }

    /// Serialize as a JSON array with four-space indentation
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.examples.serialize(&mut serializer)?;
        Ok(())
    }

    /// Write the whole dataset to `path` in one go
    ///
    /// The JSON is rendered in memory first, so every failure touching the
    /// file is reported as I/O on `path`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        fs::write(path, buffer).map_err(|e| ExtractError::io(path, e))
    }
}
