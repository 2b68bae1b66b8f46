//! Corpus file listing and permissive reading

use crate::error::{ExtractError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Lines starting with this character are markup and never annotated
pub const MARKUP_PREFIX: char = '<';

/// Default number of corpus files to examine
pub const DEFAULT_MAX_FILES: usize = 55;

/// Lists corpus files and yields annotatable lines
#[derive(Debug, Clone, Copy)]
pub struct CorpusScanner {
    max_files: usize,
}

impl Default for CorpusScanner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILES)
    }
}

impl CorpusScanner {
    pub fn new(max_files: usize) -> Self {
        Self { max_files }
    }

    /// The first `max_files` directory entries, in listing order
    ///
    /// Entries are not sorted; the order is whatever the file system
    /// returns.
    pub fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| ExtractError::io(dir, e))?;

        let mut files = Vec::new();
        for entry in entries.take(self.max_files) {
            let entry = entry.map_err(|e| ExtractError::io(dir, e))?;
            files.push(entry.path());
        }

        Ok(files)
    }
}

/// Read a file as text, dropping invalid UTF-8 sequences
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ExtractError::io(path, e))?;
    Ok(decode_dropping_invalid(&bytes))
}

/// Decode UTF-8, skipping undecodable bytes instead of replacing them
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Trimmed, non-empty, non-markup lines of `text`
///
/// LF, CRLF and lone CR all end a line. A CRLF pair yields an empty piece
/// between the two characters, which the blank-line filter drops.
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(MARKUP_PREFIX))
}
