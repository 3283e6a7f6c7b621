pub mod blocks;
pub mod similarity;
pub mod spans;
pub mod corpus;

// Re-export the main types
pub use self::blocks::{MatchingBlock, SequenceMatcher};
pub use self::similarity::{similarity, PairComparison, SimilarityCalculator};
pub use self::spans::extract_spans;
pub use self::corpus::LocalPlagiarismEngine;
