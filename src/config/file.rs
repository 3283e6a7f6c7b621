// src/config/file.rs

use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use crate::error::{Error, Result};
use super::FromIni;

/// Name prefix of documents that only hold pasted text for one request.
pub const DEFAULT_TRANSIENT_PREFIX: &str = "temp_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub upload_dir: PathBuf,
    pub allowed_extensions: Vec<String>,
    pub transient_prefix: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./uploads"),
            allowed_extensions: vec!["pdf".to_string(), "txt".to_string()],
            transient_prefix: DEFAULT_TRANSIENT_PREFIX.to_string(),
        }
    }
}

impl FromIni for FileConfig {
    fn from_ini_section(&mut self, _section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        match key {
            "upload_dir" => {
                self.upload_dir = PathBuf::from(value.trim_matches('"'));
                Some(Ok(()))
            },
            "allowed_extensions" => {
                let extensions: Vec<String> = value
                    .trim_matches('"')
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect();
                if extensions.is_empty() {
                    return Some(Err(Error::Config(
                        format!("Invalid allowed_extensions (empty list): {}", value)
                    )));
                }
                self.allowed_extensions = extensions;
                Some(Ok(()))
            },
            "transient_prefix" => {
                let prefix = value.trim_matches('"');
                if prefix.is_empty() {
                    return Some(Err(Error::Config(
                        "transient_prefix must not be empty".to_string()
                    )));
                }
                self.transient_prefix = prefix.to_string();
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if self.transient_prefix.is_empty() {
            return Err(Error::Config(
                "transient_prefix must not be empty".to_string()
            ));
        }
        if self.allowed_extensions.is_empty() {
            return Err(Error::Config(
                "allowed_extensions must list at least one extension".to_string()
            ));
        }

        // Create the upload directory if it doesn't exist
        std::fs::create_dir_all(&self.upload_dir)?;

        Ok(())
    }
}
