// src/config/subsystems/llm.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_base: String,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash-8b".to_string(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl FromIni for LlmConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "llm" {
            return None;
        }

        match key {
            "api_base" => {
                self.api_base = value.trim_matches('"').trim_end_matches('/').to_string();
                Some(Ok(()))
            },
            "model" => {
                self.model = value.trim_matches('"').to_string();
                Some(Ok(()))
            },
            "api_key" => {
                self.api_key = value.trim_matches('"').to_string();
                Some(Ok(()))
            },
            "timeout_secs" => {
                match value.parse::<u64>() {
                    Ok(secs) if secs > 0 => {
                        self.timeout_secs = secs;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid timeout_secs (must be > 0): {}", value)
                    ))),
                }
            },
            _ => None,
        }
    }
}

impl LlmConfig {
    pub fn validate(&self) -> Result<()> {
        if self.model.is_empty() {
            return Err(Error::Config("llm model must not be empty".to_string()));
        }
        if self.api_base.is_empty() {
            return Err(Error::Config("llm api_base must not be empty".to_string()));
        }
        Ok(())
    }
}
