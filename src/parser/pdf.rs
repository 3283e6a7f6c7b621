use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use log::debug;
use super::{ParserError, Result};

/// Extract the text of every page, in document order.
///
/// The extractor panics on some malformed inputs, so panics are turned
/// into `ParserError::Unsupported` like any other extraction failure.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    let data = fs::read(path)?;

    let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&data)
    }));

    match extracted {
        Ok(Ok(pages)) => {
            debug!("Extracted {} pages from {:?}", pages.len(), path);
            Ok(pages)
        },
        Ok(Err(e)) => Err(ParserError::Unsupported(
            format!("failed to extract text from {:?}: {}", path, e)
        )),
        Err(_) => Err(ParserError::Unsupported(
            format!("PDF extractor aborted on {:?}", path)
        )),
    }
}
