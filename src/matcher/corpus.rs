use std::fs;
use std::path::Path;
use log::{info, debug, warn, error};

use crate::config::DocAssistConfig;
use crate::config::subsystems::MatcherConfig;
use crate::error::Result;
use crate::parser::{FileTextResolver, TextResolver};
use crate::types::{identifier_of, to_percentage, ComparisonResult, Document};
use super::similarity::SimilarityCalculator;

/// Compares a query document against every stored document in a flat
/// directory. Failures on individual candidates never abort the scan.
pub struct LocalPlagiarismEngine<R: TextResolver = FileTextResolver> {
    calculator: SimilarityCalculator,
    resolver: R,
    transient_prefix: String,
}

impl LocalPlagiarismEngine<FileTextResolver> {
    pub fn new(config: MatcherConfig, transient_prefix: &str) -> Self {
        Self::with_resolver(config, transient_prefix, FileTextResolver::new())
    }

    pub fn from_config(config: &DocAssistConfig) -> Self {
        Self::new(config.matcher.clone(), &config.files.transient_prefix)
    }
}

impl<R: TextResolver> LocalPlagiarismEngine<R> {
    pub fn with_resolver(config: MatcherConfig, transient_prefix: &str, resolver: R) -> Self {
        Self {
            calculator: SimilarityCalculator::new(config),
            resolver,
            transient_prefix: transient_prefix.to_string(),
        }
    }

    /// One result per candidate scoring above the threshold with at least
    /// one qualifying span, in directory listing order.
    ///
    /// `query_path` identifies the query document so it is never compared
    /// with itself. An empty query or an unreadable corpus yields no results.
    pub fn scan_corpus<P, Q>(&self, query_text: &str, query_path: P, corpus_dir: Q) -> Vec<ComparisonResult>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let query_path = query_path.as_ref();
        let corpus_dir = corpus_dir.as_ref();

        if query_text.is_empty() {
            debug!("Empty query text, skipping corpus scan");
            return Vec::new();
        }

        let entries = match fs::read_dir(corpus_dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Failed to read corpus directory {:?}: {}", corpus_dir, e);
                return Vec::new();
            }
        };

        let query_identifier = identifier_of(query_path);
        let mut results = Vec::new();
        let mut scanned = 0usize;

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    warn!("Skipping unreadable corpus entry in {:?}: {}", corpus_dir, e);
                    continue;
                }
            };
            let identifier = identifier_of(&path);

            if path == query_path || (!query_identifier.is_empty() && identifier == query_identifier) {
                continue;
            }
            if identifier.starts_with(&self.transient_prefix) {
                debug!("Skipping transient document {}", identifier);
                continue;
            }
            if !path.is_file() {
                continue;
            }

            scanned += 1;
            match self.compare_candidate(query_text, &path) {
                Ok(Some(result)) => results.push(result),
                Ok(None) => {},
                Err(e) => warn!("Error processing {:?}: {}", path, e),
            }
        }

        info!("Scanned {} corpus documents in {:?}, {} matched", scanned, corpus_dir, results.len());
        results
    }

    fn compare_candidate(&self, query_text: &str, path: &Path) -> Result<Option<ComparisonResult>> {
        let candidate = match self.resolver.resolve_text(path)? {
            Some(text) if !text.is_empty() => Document::new(path, text),
            _ => {
                debug!("No text resolved for {:?}", path);
                return Ok(None);
            }
        };

        let comparison = self.calculator.compare(query_text, &candidate.content);
        if !self.calculator.is_match(&comparison) {
            debug!("{} below reporting bar (ratio {:.4}, {} spans)",
                candidate.identifier, comparison.ratio, comparison.spans.len());
            return Ok(None);
        }

        Ok(Some(ComparisonResult {
            file: candidate.identifier,
            similarity: to_percentage(comparison.ratio),
            matches: comparison.spans,
        }))
    }
}
