pub mod file;
pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::Result;
use log::{info, warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocAssistConfig {
    // Upload directory and admission rules
    pub files: file::FileConfig,

    // Subsystem configs
    pub matcher: subsystems::MatcherConfig,
    pub llm: subsystems::LlmConfig,
    pub online: subsystems::OnlineConfig,
}

impl DocAssistConfig {
    pub fn validate(&self) -> Result<()> {
        self.files.validate()?;
        self.matcher.validate()?;
        self.llm.validate()?;
        self.online.validate()?;
        Ok(())
    }

    /// Parse INI text without touching the filesystem or the environment.
    pub fn parse_ini(content: &str) -> Self {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                if let Some(result) = match current_section.as_str() {
                    "file" => config.files.from_ini_section(&current_section, key, value),
                    "matcher" => config.matcher.from_ini_section(&current_section, key, value),
                    "llm" => config.llm.from_ini_section(&current_section, key, value),
                    "online" => config.online.from_ini_section(&current_section, key, value),
                    _ => None,
                } {
                    if let Err(e) = result {
                        warn!("Error processing config key {}={}: {}", key, value, e);
                    }
                } else {
                    warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section);
                }
            }
        }

        config
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        let absolute_path = std::fs::canonicalize(&path)
            .unwrap_or_else(|_| path.as_ref().to_path_buf());

        trace!("Loading configuration from: {:?}", absolute_path);

        let content = fs::read_to_string(&path)?;
        let mut config = Self::parse_ini(&content);
        config.apply_env();
        config.validate()?;
        info!("Loaded configuration from {:?}", absolute_path);
        Ok(config)
    }

    /// Defaults plus environment overrides, validated.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// API keys come from the environment when set there.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(subsystems::llm::API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.llm.api_key = key.trim().to_string();
            }
        }
        if let Ok(key) = std::env::var(subsystems::online::API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.online.api_key = key.trim().to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_keeps_defaults() {
        let ini = r#"
# local scan settings
[file]
upload_dir = "data/uploads"
transient_prefix = paste_

[matcher]
similarity_threshold = 0.25
context_length = 10

[llm]
model = gemini-1.5-pro

[unknown]
foo = bar
"#;
        let config = DocAssistConfig::parse_ini(ini);
        assert_eq!(config.files.upload_dir, Path::new("data/uploads"));
        assert_eq!(config.files.transient_prefix, "paste_");
        assert_eq!(config.matcher.similarity_threshold, 0.25);
        assert_eq!(config.matcher.context_length, 10);
        assert_eq!(config.matcher.min_block_size, 20);
        assert_eq!(config.matcher.max_spans, 3);
        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert!(config.online.endpoint.is_empty());
    }

    #[test]
    fn invalid_values_leave_defaults() {
        let ini = "[matcher]\nsimilarity_threshold = 1.5\nmax_spans = 0\n";
        let config = DocAssistConfig::parse_ini(ini);
        assert_eq!(config.matcher.similarity_threshold, 0.10);
        assert_eq!(config.matcher.max_spans, 3);
    }

    #[test]
    fn from_ini_creates_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        let ini_path = dir.path().join("docassist.ini");
        fs::write(&ini_path, format!("[file]\nupload_dir = {}\n", uploads.display())).unwrap();

        let config = DocAssistConfig::from_ini(&ini_path).unwrap();
        assert_eq!(config.files.upload_dir, uploads);
        assert!(uploads.is_dir());
    }
}
