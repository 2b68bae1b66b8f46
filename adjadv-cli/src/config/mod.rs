//! Configuration module

use crate::error::CliError;
use adjadv_core::ExtractConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Word list locations
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Corpus scanning configuration
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Annotation backend
    #[serde(default)]
    pub annotator: AnnotatorConfig,
}

/// Word list locations
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Adjective list, one word per line
    pub adjectives: PathBuf,

    /// Adverb list, one word per line
    pub adverbs: PathBuf,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            adjectives: PathBuf::from("../data/adjectives.txt"),
            adverbs: PathBuf::from("../data/adverbs.txt"),
        }
    }
}

/// Corpus scanning configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Number of corpus files to examine
    pub max_files: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            max_files: adjadv_core::corpus::DEFAULT_MAX_FILES,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Dataset file
    pub path: PathBuf,

    /// Maximum examples per label
    pub per_label_cap: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("../data/adj_vs_adv_data.json"),
            per_label_cap: adjadv_core::dataset::DEFAULT_PER_LABEL_CAP,
        }
    }
}

/// External annotator process
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Program to start
    pub program: String,

    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            args: vec![
                "../scripts/spacy_annotate.py".to_string(),
                "--model".to_string(),
                "en_core_web_md".to_string(),
            ],
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message())).into()
        })
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validated core settings
    pub fn extract_config(&self) -> Result<ExtractConfig> {
        ExtractConfig::builder()
            .max_files(self.corpus.max_files)
            .per_label_cap(self.output.per_label_cap)
            .build()
            .map_err(|e| CliError::from(e).into())
    }
}
