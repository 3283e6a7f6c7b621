use serde::{Serialize, Deserialize};
use std::path::Path;

/// A stored or transient document together with its resolved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub identifier: String,
    pub content: String,
}

impl Document {
    pub fn new<P: AsRef<Path>>(path: P, content: String) -> Self {
        Self {
            identifier: identifier_of(path.as_ref()),
            content,
        }
    }
}

/// Base file name of a path, lossily converted. Empty when the path has none.
pub fn identifier_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Window of the query text surrounding a shared block.
/// `start` and `end` are character offsets into the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

// For JSON output of a local scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub file: String,
    /// Percentage in [0, 100], rounded to two decimals
    pub similarity: f64,
    pub matches: Vec<MatchedSpan>,
}

/// Round a ratio in [0, 1] to a percentage with two decimals.
///
/// Uses `f64::round`, so an exact half rounds away from zero rather than
/// to even. Ratios are `2*M/T` fractions that almost never land on a tie.
pub fn to_percentage(ratio: f64) -> f64 {
    (ratio * 100.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_base_name() {
        assert_eq!(identifier_of(Path::new("uploads/report.pdf")), "report.pdf");
        assert_eq!(identifier_of(Path::new("notes.txt")), "notes.txt");
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(0.0), 0.0);
        assert_eq!(to_percentage(1.0 / 3.0), 33.33);
        assert_eq!(to_percentage(2.0 / 3.0), 66.67);
    }

    #[test]
    fn document_takes_base_name_as_identifier() {
        let doc = Document::new("uploads/nested/thesis.pdf", "body".to_string());
        assert_eq!(doc.identifier, "thesis.pdf");
        assert_eq!(doc.content, "body");
    }
}
