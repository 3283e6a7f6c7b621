// src/config/subsystems/online.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;

pub const API_KEY_ENV: &str = "PLAGIARISM_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineConfig {
    // Empty endpoint disables online comparison
    pub endpoint: String,
    #[serde(skip_serializing)]
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for OnlineConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl FromIni for OnlineConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "online" {
            return None;
        }

        match key {
            "endpoint" => {
                self.endpoint = value.trim_matches('"').to_string();
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

impl OnlineConfig {
    pub fn is_enabled(&self) -> bool {
        !self.endpoint.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_enabled()
            && !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://"))
        {
            return Err(Error::Config(
                format!("online endpoint must be an http(s) URL: {}", self.endpoint)
            ));
        }
        Ok(())
    }
}
