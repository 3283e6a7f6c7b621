use std::time::Duration;
use log::{debug, error};
use reqwest::blocking::Client;
use serde::{Serialize, Deserialize};

use crate::config::subsystems::OnlineConfig;
use crate::error::{Error, Result};

/// Source reported by the remote service for a submitted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineSource {
    pub url: String,
    #[serde(default)]
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlineReport {
    /// Percentage of the text found online
    pub score: f64,
    #[serde(default)]
    pub sources: Vec<OnlineSource>,
}

/// Remote plagiarism scoring.
pub trait RemoteScorer {
    fn score(&self, text: &str) -> Result<OnlineReport>;
}

#[derive(Serialize)]
struct ScoreRequest<'a> {
    text: &'a str,
}

pub struct HttpRemoteScorer {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpRemoteScorer {
    pub fn new(config: &OnlineConfig) -> Result<Self> {
        if !config.is_enabled() {
            return Err(Error::config("online comparison is disabled (no [online] endpoint)"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl RemoteScorer for HttpRemoteScorer {
    fn score(&self, text: &str) -> Result<OnlineReport> {
        let mut request = self.client
            .post(&self.endpoint)
            .json(&ScoreRequest { text });
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        debug!("→ online comparison request: {} chars", text.len());
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let snippet: String = body.chars().take(512).collect();
            error!("Online comparison returned {}: {}", status, snippet);
            return Err(Error::online(format!("HTTP {}: {}", status.as_u16(), snippet)));
        }

        let report: OnlineReport = serde_json::from_str(&body)?;
        if !(0.0..=100.0).contains(&report.score) {
            return Err(Error::online(format!("score out of range: {}", report.score)));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config_for(server: &MockServer, key: &str) -> OnlineConfig {
        OnlineConfig {
            endpoint: server.url("/check"),
            api_key: key.to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn parses_report_and_sends_bearer_key() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/check")
                .header("authorization", "Bearer token")
                .json_body(json!({ "text": "some essay" }));
            then.status(200).json_body(json!({
                "score": 42.5,
                "sources": [ { "url": "https://example.org/a", "similarity": 40.0 } ]
            }));
        });

        let scorer = HttpRemoteScorer::new(&config_for(&server, "token")).unwrap();
        let report = scorer.score("some essay").unwrap();
        mock.assert();
        assert_eq!(report.score, 42.5);
        assert_eq!(report.sources.len(), 1);
        assert_eq!(report.sources[0].url, "https://example.org/a");
    }

    #[test]
    fn server_errors_surface() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/check");
            then.status(500).body("boom");
        });

        let scorer = HttpRemoteScorer::new(&config_for(&server, "")).unwrap();
        assert!(matches!(scorer.score("text"), Err(Error::Online(_))));
    }

    #[test]
    fn disabled_without_endpoint() {
        assert!(matches!(
            HttpRemoteScorer::new(&OnlineConfig::default()),
            Err(Error::Config(_))
        ));
    }
}
