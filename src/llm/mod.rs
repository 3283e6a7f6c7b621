use std::time::Duration;
use log::{debug, error};
use reqwest::blocking::Client;
use serde::{Serialize, Deserialize};

use crate::config::subsystems::LlmConfig;
use crate::error::{Error, Result};

/// Anything that turns a prompt into generated text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::config(format!(
                "no Gemini API key configured (set {} or [llm] api_key)",
                crate::config::subsystems::llm::API_KEY_ENV
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_base, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: [RequestContent { parts: [RequestPart { text: prompt }] }],
        };

        debug!("→ Gemini request: model = {}, prompt = {} chars", self.model, prompt.len());
        let response = self.client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!("← status = {}, body = {} bytes", status, body.len());

        if !status.is_success() {
            let snippet: String = body.chars().take(512).collect();
            error!("Gemini returned {}: {}", status, snippet);
            return Err(Error::llm(format!("HTTP {}: {}", status.as_u16(), snippet)));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::llm("response contained no text"));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn config_for(server: &MockServer) -> LlmConfig {
        LlmConfig {
            api_base: server.base_url(),
            model: "test-model".to_string(),
            api_key: "secret".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn returns_concatenated_candidate_text() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/test-model:generateContent")
                .query_param("key", "secret")
                .body_contains("Summarize this");
            then.status(200).json_body(json!({
                "candidates": [
                    { "content": { "parts": [ { "text": "Key Points:\n" }, { "text": "• one" } ] } }
                ]
            }));
        });

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let text = client.generate("Summarize this").unwrap();
        mock.assert();
        assert_eq!(text, "Key Points:\n• one");
    }

    #[test]
    fn http_failure_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(403).body("API key not valid");
        });

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        let err = client.generate("anything").unwrap_err();
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn empty_candidates_are_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({ "candidates": [] }));
        });

        let client = GeminiClient::new(&config_for(&server)).unwrap();
        assert!(matches!(client.generate("anything"), Err(Error::Llm(_))));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let config = LlmConfig::default();
        assert!(matches!(GeminiClient::new(&config), Err(Error::Config(_))));
    }
}
