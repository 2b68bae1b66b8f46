//! Extraction settings

use crate::corpus::DEFAULT_MAX_FILES;
use crate::dataset::DEFAULT_PER_LABEL_CAP;
use crate::error::{ExtractError, Result};

/// Validated extraction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    /// How many corpus files to examine
    pub max_files: usize,
    /// Maximum examples kept per label
    pub per_label_cap: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            per_label_cap: DEFAULT_PER_LABEL_CAP,
        }
    }
}

impl ExtractConfig {
    /// Create a builder
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Set the number of corpus files to examine
    pub fn max_files(mut self, max_files: usize) -> Self {
        self.config.max_files = max_files;
        self
    }

    /// Set the per-label cap
    pub fn per_label_cap(mut self, cap: usize) -> Self {
        self.config.per_label_cap = cap;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ExtractConfig> {
        if self.config.max_files == 0 {
            return Err(ExtractError::Config(
                "max_files must be at least 1".to_string(),
            ));
        }
        if self.config.per_label_cap == 0 {
            return Err(ExtractError::Config(
                "per_label_cap must be at least 1".to_string(),
            ));
        }

        Ok(self.config)
    }
}
