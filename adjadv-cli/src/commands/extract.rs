//! Extract command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output;
use crate::progress::ProgressReporter;
use adjadv_core::{CommandAnnotator, Extractor, Lexicon, MorphologyMap};
use anyhow::{Context, Result};
use clap::Args;
use std::io;
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Directory holding the corpus files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "ADJADV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output file (overrides the configured path)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let extract_config = config.extract_config()?;
        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| config.output.path.clone());

        let lexicon = Lexicon::load(&config.lexicon.adjectives, &config.lexicon.adverbs)
            .map_err(CliError::from)
            .context("Failed to load word lists")?;
        let map = MorphologyMap::build(&lexicon);
        log::info!(
            "{} adjectives, {} adverbs, {} adjective/adverb pairs",
            lexicon.adjective_count(),
            lexicon.adverb_count(),
            map.len()
        );

        let annotator = CommandAnnotator::spawn(&config.annotator.program, &config.annotator.args)
            .map_err(CliError::from)
            .context("Failed to start annotator")?;

        let mut progress = ProgressReporter::new(self.quiet);
        let mut extractor = Extractor::new(extract_config, map, annotator);
        let dataset = extractor
            .extract(&self.input_dir, &mut progress)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to scan {}", self.input_dir.display()))?;
        progress.finish();

        let summary = dataset.summary();
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        output::write_totals(&mut stdout, &summary)?;

        dataset
            .write_json(&output_path)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;

        output::write_completion(&mut stdout, &summary, &output_path)?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
