//! Extraction driver
//!
//! Wires the corpus scanner, the annotator and the collector into one
//! sequential pass: files in listing order, then lines, sentences and
//! tokens. The first error aborts the run.

use crate::annotation::Annotator;
use crate::collector::{Collected, ExampleCollector};
use crate::config::ExtractConfig;
use crate::corpus::{content_lines, read_lossy, CorpusScanner};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::morphology::MorphologyMap;
use std::path::Path;

/// Hooks for reporting scan progress
pub trait ScanObserver {
    /// Called once with the number of files that will be scanned
    fn files_listed(&mut self, _total: usize) {}

    fn file_started(&mut self, _path: &Path) {}

    /// Called after a file is done, with running example counts
    fn file_finished(&mut self, _path: &Path, _adjectives: usize, _adverbs: usize) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Sequential example extractor
#[derive(Debug)]
pub struct Extractor<A> {
    config: ExtractConfig,
    map: MorphologyMap,
    annotator: A,
}

impl<A: Annotator> Extractor<A> {
    pub fn new(config: ExtractConfig, map: MorphologyMap, annotator: A) -> Self {
        Self {
            config,
            map,
            annotator,
        }
    }

    /// Scan `input_dir` and return every match, untruncated
    pub fn run(
        &mut self,
        input_dir: &Path,
        observer: &mut dyn ScanObserver,
    ) -> Result<Collected> {
        let scanner = CorpusScanner::new(self.config.max_files);
        let files = scanner.list_files(input_dir)?;
        observer.files_listed(files.len());

        let mut collector = ExampleCollector::new(&self.map);

        for path in &files {
            observer.file_started(path);
            log::info!("{}", path.display());

            let text = read_lossy(path)?;
            for line in content_lines(&text) {
                let sentences = self.annotator.annotate(line)?;
                collector.line_annotated();
                for sentence in &sentences {
                    collector.collect_sentence(sentence);
                }
            }

            collector.file_finished();
            observer.file_finished(path, collector.adjective_count(), collector.adverb_count());
        }

        let collected = collector.finish();
        log::debug!(
            "Scanned {} files, {} lines, {} sentences",
            collected.files,
            collected.lines,
            collected.sentences
        );

        Ok(collected)
    }

    /// Scan `input_dir` and sample the balanced dataset
    pub fn extract(
        &mut self,
        input_dir: &Path,
        observer: &mut dyn ScanObserver,
    ) -> Result<Dataset> {
        let collected = self.run(input_dir, observer)?;
        Ok(Dataset::sample(collected, self.config.per_label_cap))
    }
}
