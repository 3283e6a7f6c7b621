use log::trace;

use crate::config::subsystems::MatcherConfig;
use crate::types::MatchedSpan;
use super::blocks::SequenceMatcher;
use super::spans::extract_spans;

/// Ratio and spans computed from one block discovery pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PairComparison {
    pub ratio: f64,
    pub spans: Vec<MatchedSpan>,
}

/// Character-level Ratcliff/Obershelp ratio of two strings, in [0, 1].
///
/// Case and whitespace are significant.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    SequenceMatcher::new(query, candidate).ratio()
}

pub struct SimilarityCalculator {
    config: MatcherConfig,
}

impl SimilarityCalculator {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// Score `candidate` against `query` and pull the query-side spans
    /// out of the same matching blocks the ratio was computed from.
    pub fn compare(&self, query: &str, candidate: &str) -> PairComparison {
        let mut matcher = SequenceMatcher::new(query, candidate);
        let ratio = matcher.ratio();
        let blocks = matcher.matching_blocks().to_vec();
        let spans = extract_spans(
            matcher.a(),
            &blocks,
            self.config.min_block_size,
            self.config.context_length,
            self.config.max_spans,
        );
        trace!("Compared pair: ratio {:.4}, {} blocks, {} spans", ratio, blocks.len(), spans.len());
        PairComparison { ratio, spans }
    }

    /// Ratio above threshold and at least one qualifying span.
    pub fn is_match(&self, comparison: &PairComparison) -> bool {
        comparison.ratio > self.config.similarity_threshold && !comparison.spans.is_empty()
    }
}
