// src/config/subsystems/matcher.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Candidates need a ratio strictly above this to be reported
    pub similarity_threshold: f64,
    /// Blocks must be strictly longer than this to yield a span
    pub min_block_size: usize,
    /// Characters of query context kept on each side of a block
    pub context_length: usize,
    /// Maximum spans reported per candidate
    pub max_spans: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.10,
            min_block_size: 20,
            context_length: 50,
            max_spans: 3,
        }
    }
}

impl FromIni for MatcherConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "matcher" {
            return None;
        }

        match key {
            "similarity_threshold" => {
                match value.parse::<f64>() {
                    Ok(threshold) if (0.0..=1.0).contains(&threshold) => {
                        self.similarity_threshold = threshold;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid similarity_threshold (must be between 0 and 1): {}", value)
                    ))),
                }
            },
            "min_block_size" => {
                match value.parse() {
                    Ok(size) => {
                        self.min_block_size = size;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid min_block_size: {}", value)
                    ))),
                }
            },
            "context_length" => {
                match value.parse() {
                    Ok(length) => {
                        self.context_length = length;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid context_length: {}", value)
                    ))),
                }
            },
            "max_spans" => {
                match value.parse() {
                    Ok(count) if count > 0 => {
                        self.max_spans = count;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid max_spans (must be > 0): {}", value)
                    ))),
                }
            },

            // Unknown key
            _ => None,
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::Config(
                "similarity_threshold must be between 0 and 1".to_string()
            ));
        }
        if self.max_spans == 0 {
            return Err(Error::Config(
                "max_spans must be greater than 0".to_string()
            ));
        }
        Ok(())
    }
}
