// utils/tempfile.rs
use std::path::{Path, PathBuf};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use chrono::Local;
use log::{debug, warn};
use crate::error::Result;
use crate::types::identifier_of;

// Disambiguates documents created within the same millisecond
static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Pasted text persisted to the upload directory for the duration of one
/// comparison. The file is removed when this value is dropped.
///
/// Names start with the transient prefix so concurrent corpus scans skip them.
#[derive(Debug)]
pub struct TransientDocument {
    path: PathBuf,
}

impl TransientDocument {
    /// Write `text` to `{dir}/{prefix}{timestamp}_{counter}.txt`
    pub fn persist<P: AsRef<Path>>(dir: P, prefix: &str, text: &str) -> Result<Self> {
        fs::create_dir_all(&dir)?;

        let timestamp = Local::now().format("%Y%m%d%H%M%S%3f");
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
        let filename = format!("{}{}_{}.txt", prefix, timestamp, counter);
        let path = dir.as_ref().join(filename);

        debug!("Creating transient document: {:?}", path);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn identifier(&self) -> String {
        identifier_of(&self.path)
    }
}

impl Drop for TransientDocument {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed transient document {:?}", self.path),
            Err(e) => warn!("Failed to remove transient document {:?}: {}", self.path, e),
        }
    }
}
