use crate::types::MatchedSpan;
use super::blocks::MatchingBlock;

/// Widen each block longer than `min_block_size` by `context_length`
/// characters of query text on both sides, keeping at most `max_spans`.
///
/// `query` must be the same character sequence the blocks were computed on.
pub fn extract_spans(
    query: &[char],
    blocks: &[MatchingBlock],
    min_block_size: usize,
    context_length: usize,
    max_spans: usize,
) -> Vec<MatchedSpan> {
    blocks
        .iter()
        .filter(|block| block.size > min_block_size)
        .take(max_spans)
        .map(|block| {
            let start = block.a_start.saturating_sub(context_length);
            let end = (block.a_start + block.size + context_length).min(query.len());
            MatchedSpan {
                text: query[start..end].iter().collect(),
                start,
                end,
            }
        })
        .collect()
}
