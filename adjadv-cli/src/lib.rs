//! adjadv CLI library
//!
//! This library provides the command-line interface for extracting
//! adjective/adverb training examples.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
