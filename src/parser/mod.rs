pub mod pdf;

use std::fs;
use std::path::Path;
use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("Invalid text: {0}")]
   InvalidText(String),

   #[error("Unsupported document: {0}")]
   Unsupported(String),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// Turns a stored document into plain text.
///
/// `Ok(None)` means the document could not be converted but the failure is
/// not worth reporting (an unreadable PDF). `Err` is reserved for hard
/// failures of the caller's flow, such as a text file that is not UTF-8.
pub trait TextResolver {
    fn resolve_text(&self, path: &Path) -> Result<Option<String>>;
}

/// Resolves `.pdf` files through page extraction and everything else as UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextResolver;

impl FileTextResolver {
    pub fn new() -> Self {
        Self
    }
}

impl TextResolver for FileTextResolver {
    fn resolve_text(&self, path: &Path) -> Result<Option<String>> {
        if is_pdf(path) {
            return match pdf::extract_pages(path) {
                Ok(pages) => Ok(Some(pages.join("\n"))),
                Err(e) => {
                    warn!("Error extracting text from PDF {:?}: {}", path, e);
                    Ok(None)
                }
            };
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            ParserError::InvalidText(format!("{:?} is not valid UTF-8: {}", path, e))
        })?;
        debug!("Read {} bytes of text from {:?}", text.len(), path);
        Ok(Some(text))
    }
}

/// Case-insensitive `.pdf` suffix check on the file name.
pub fn is_pdf(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}

/// Upload admission: the name needs an extension found in `allowed`.
pub fn is_allowed_file(filename: &str, allowed: &[String]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext))
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["pdf".to_string(), "txt".to_string()]
    }

    #[test]
    fn admits_known_extensions_only() {
        assert!(is_allowed_file("thesis.PDF", &allowed()));
        assert!(is_allowed_file("notes.final.txt", &allowed()));
        assert!(!is_allowed_file("slides.pptx", &allowed()));
        assert!(!is_allowed_file("README", &allowed()));
        assert!(!is_allowed_file("archive.txt.zip", &allowed()));
    }

    #[test]
    fn pdf_detection_ignores_case() {
        assert!(is_pdf(Path::new("uploads/Report.Pdf")));
        assert!(!is_pdf(Path::new("uploads/report.pdf.txt")));
    }

    #[test]
    fn reads_utf8_text_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("essay.txt");
        fs::write(&path, "Première ligne\nsecond line").unwrap();

        let text = FileTextResolver::new().resolve_text(&path).unwrap();
        assert_eq!(text.as_deref(), Some("Première ligne\nsecond line"));
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let result = FileTextResolver::new().resolve_text(&path);
        assert!(matches!(result, Err(ParserError::InvalidText(_))));
    }

    #[test]
    fn pdf_pages_are_joined_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lecture.PDF");
        pdf::test_support::write_pdf(&path, &["Opening page text", "Closing page text"]);

        let text = FileTextResolver::new().resolve_text(&path).unwrap().unwrap();
        let first = text.find("Opening page text").unwrap();
        let second = text.find("Closing page text").unwrap();
        assert!(first < second);
        assert!(text[first..second].contains('\n'));

        let pages = pdf::extract_pages(&path).unwrap();
        assert_eq!(text, pages.join("\n"));
    }

    #[test]
    fn malformed_pdf_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let text = FileTextResolver::new().resolve_text(&path).unwrap();
        assert!(text.is_none());
    }
}
