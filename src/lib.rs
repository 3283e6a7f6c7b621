//! docassist is a document assistant: few-shot prompted LLM features over
//! uploaded or pasted documents, plus similarity checks of a document against
//! previously uploaded ones (local) or a remote plagiarism service (online).

// Module declarations
pub mod error;
pub mod parser;
pub mod matcher;
pub mod prompt;
pub mod llm;
pub mod online;
pub mod assistant;
pub mod utils;
pub mod config;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use matcher::{LocalPlagiarismEngine, SimilarityCalculator};
pub use parser::{FileTextResolver, TextResolver};
pub use assistant::{Assistant, DocumentInput};
pub use types::{ComparisonResult, Document, MatchedSpan};
pub use utils::TransientDocument;

// Re-export the config from config module
pub use config::DocAssistConfig;
